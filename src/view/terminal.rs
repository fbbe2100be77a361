//! Plain-text view for terminals

use crate::progress::ProgressReport;
use crate::render::{LinkKind, RenderedSummary};
use crate::view::{UploadView, PROCESSING_TEXT};
use std::io::{self, Write};

const DEFAULT_BAR_WIDTH: usize = 30;

/// Writes upload status to a terminal (or any writer)
///
/// Progress is redrawn in place on a single line. Relative link URLs are
/// resolved against `base_url` so they can be opened directly.
pub struct TerminalView<W: Write = io::Stdout> {
    out: W,
    base_url: String,
    bar_width: usize,
    submit_enabled: bool,
    progress_visible: bool,
}

impl TerminalView<io::Stdout> {
    pub fn stdout(base_url: impl Into<String>) -> Self {
        Self::new(io::stdout(), base_url)
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, base_url: impl Into<String>) -> Self {
        Self {
            out,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bar_width: DEFAULT_BAR_WIDTH,
            submit_enabled: true,
            progress_visible: false,
        }
    }

    pub fn bar_width(mut self, width: usize) -> Self {
        self.bar_width = width;
        self
    }

    /// Whether a new submission would currently be accepted
    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn resolve(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else if url.starts_with('/') {
            format!("{}{}", self.base_url, url)
        } else {
            format!("{}/{}", self.base_url, url)
        }
    }

    fn finish_progress_line(&mut self) {
        if self.progress_visible {
            self.progress_visible = false;
            self.write_line(format_args!(""));
        }
    }

    fn write_line(&mut self, line: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            log::warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write> UploadView for TerminalView<W> {
    fn show_unsupported_notice(&mut self, visible: bool) {
        if visible {
            self.write_line(format_args!(
                "Unsupported file. Only JPEG and PNG images can be uploaded."
            ));
        }
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn reset(&mut self, initial: &ProgressReport) {
        self.progress_visible = false;
        self.show_progress(initial);
    }

    fn show_progress(&mut self, progress: &ProgressReport) {
        let filled = progress.bar_cells(self.bar_width).min(self.bar_width);
        let bar = format!(
            "{}{}",
            "#".repeat(filled),
            ".".repeat(self.bar_width - filled)
        );

        self.progress_visible = true;
        let result = write!(self.out, "\r[{}] {}", bar, progress.text).and_then(|_| self.out.flush());
        if let Err(e) = result {
            log::warn!("Failed to write to terminal: {}", e);
        }
    }

    fn show_processing(&mut self) {
        self.finish_progress_line();
        self.write_line(format_args!("{}", PROCESSING_TEXT));
    }

    fn show_summary(&mut self, summary: &RenderedSummary) {
        self.finish_progress_line();
        for line in summary.status_lines() {
            self.write_line(format_args!("{}", line));
        }
        for (kind, url) in summary.links.visible() {
            let label = match kind {
                LinkKind::Source => "Original",
                LinkKind::Lossless => "Lossless",
                LinkKind::Lossy => "Lossy",
            };
            let url = self.resolve(url);
            self.write_line(format_args!("{}: {}", label, url));
        }
    }

    fn show_error(&mut self, message: &str) {
        self.finish_progress_line();
        self.write_line(format_args!("{}", message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::report;
    use crate::render::render;
    use crate::upload::types::{FileDetails, UploadResult};
    use crate::view::ERROR_TEXT;

    fn output(view: TerminalView<Vec<u8>>) -> String {
        String::from_utf8(view.into_inner()).unwrap()
    }

    #[test]
    fn test_progress_bar() {
        let mut view = TerminalView::new(Vec::new(), "http://localhost:8000").bar_width(10);
        view.reset(&report(0, 100));
        view.show_progress(&report(50, 100));
        view.show_processing();

        let text = output(view);
        assert!(text.contains("\r[..........] Uploading... 0.00%"));
        assert!(text.contains("\r[#####.....] Uploading... 50.00%"));
        assert!(text.ends_with("\nUpload Completed. Compressing...\n"));
    }

    #[test]
    fn test_summary_links_are_resolved() {
        let result = UploadResult::new(
            FileDetails::new(1000, "/uploads/a/src.jpg"),
            FileDetails::new(500, "https://cdn.example.com/cmp.jpg"),
        );

        let mut view = TerminalView::new(Vec::new(), "http://localhost:8000/");
        view.show_summary(&render(&result));

        let text = output(view);
        assert!(text.contains("Saved: 500.00byte (50.00%)"));
        assert!(text.contains("Original: http://localhost:8000/uploads/a/src.jpg"));
        assert!(text.contains("Lossless: https://cdn.example.com/cmp.jpg"));
        assert!(!text.contains("Lossy:"));
    }

    #[test]
    fn test_error_and_submit_toggle() {
        let mut view = TerminalView::new(Vec::new(), "http://localhost:8000");
        view.set_submit_enabled(false);
        assert!(!view.submit_enabled());
        view.show_error(ERROR_TEXT);
        view.set_submit_enabled(true);
        assert!(view.submit_enabled());
        assert_eq!(output(view), "Upload Error. Try again.\n");
    }
}
