//! File selection validation
//!
//! Decides whether the files a user picked may be submitted. Only JPEG and
//! PNG images are accepted by the compression service.

pub mod operations;
pub mod types;

pub use operations::{is_supported, sniff_mime, validate};
pub use types::{FileDescriptor, FileSelection, FileUpload};
