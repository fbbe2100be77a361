//! Presentation seam for the upload workflow
//!
//! The controller never touches a concrete UI. It drives an [`UploadView`],
//! which owns the status text, progress bar, unsupported-file notice,
//! submit control and download links.

pub mod terminal;

pub use terminal::TerminalView;

use crate::progress::ProgressReport;
use crate::render::RenderedSummary;

/// Status text shown once the body has been fully sent
pub const PROCESSING_TEXT: &str = "Upload Completed. Compressing...";

/// Status text shown when an attempt fails
pub const ERROR_TEXT: &str = "Upload Error. Try again.";

/// UI sinks the upload controller writes into
pub trait UploadView {
    /// Show or hide the "unsupported file" notice
    fn show_unsupported_notice(&mut self, visible: bool);

    /// Enable or disable the submit control
    fn set_submit_enabled(&mut self, enabled: bool);

    /// Prepare for a new attempt: hide previous links, show the status and
    /// an empty progress bar
    fn reset(&mut self, initial: &ProgressReport);

    /// Update the status text and progress bar
    fn show_progress(&mut self, progress: &ProgressReport);

    /// The body has been sent; hide the bar and announce compression
    fn show_processing(&mut self);

    /// Present a completed upload and reveal its download links
    fn show_summary(&mut self, summary: &RenderedSummary);

    /// Present the fixed error message
    fn show_error(&mut self, message: &str);
}

impl<V: UploadView + ?Sized> UploadView for &mut V {
    fn show_unsupported_notice(&mut self, visible: bool) {
        (**self).show_unsupported_notice(visible)
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        (**self).set_submit_enabled(enabled)
    }

    fn reset(&mut self, initial: &ProgressReport) {
        (**self).reset(initial)
    }

    fn show_progress(&mut self, progress: &ProgressReport) {
        (**self).show_progress(progress)
    }

    fn show_processing(&mut self) {
        (**self).show_processing()
    }

    fn show_summary(&mut self, summary: &RenderedSummary) {
        (**self).show_summary(summary)
    }

    fn show_error(&mut self, message: &str) {
        (**self).show_error(message)
    }
}
