//! Upload progress reporting
//!
//! Turns `(loaded, total)` byte counts into the percentage and status text
//! shown while a file is being sent, and provides the body stream that
//! produces those counts during an HTTP transfer.

pub mod stream;
pub mod types;

pub use stream::ProgressStream;
pub use types::{report, ProgressReport};
