//! Rendering of the server's compression results
//!
//! Computes byte savings for each compressed variant, formats sizes, and
//! collects the download links the view should reveal.

pub mod format;
pub mod operations;
pub mod types;

pub use format::{round_half_up, size_format, to_fixed, SIZE_UNITS};
pub use operations::{compare, parse_response, render, SUMMARY_DECIMALS};
pub use types::{DownloadLinks, LinkKind, RenderedSummary, SizeReport};
