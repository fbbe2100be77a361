//! Upload state machine
//!
//! The controller is the only owner of [`UploadState`]. It moves between
//! states in response to a submission and to the lifecycle events of the
//! single outstanding request, and it tells the view what to show.

use crate::error::{Result, SqueezeError};
use crate::progress::{report, ProgressReport};
use crate::render::{parse_response, render, RenderedSummary};
use crate::upload::types::{TransportEvent, UploadState};
use crate::validate::FileSelection;
use crate::view::{UploadView, ERROR_TEXT};

/// Drives one upload at a time through `Idle → Uploading → Processing →
/// Complete | Error`
///
/// The submit control is disabled for the whole of `Uploading` and
/// `Processing`; that is the only guard against concurrent requests.
pub struct UploadController<V: UploadView> {
    view: V,
    state: UploadState,
    verdict: bool,
    summary: Option<RenderedSummary>,
    last_error: Option<String>,
}

impl<V: UploadView> UploadController<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            state: UploadState::Idle,
            verdict: false,
            summary: None,
            last_error: None,
        }
    }

    pub fn state(&self) -> UploadState {
        self.state
    }

    /// Verdict for the most recent selection
    pub fn verdict(&self) -> bool {
        self.verdict
    }

    /// Summary of the last completed upload
    pub fn summary(&self) -> Option<&RenderedSummary> {
        self.summary.as_ref()
    }

    /// Reason the last attempt failed
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Record a new file selection and toggle the unsupported notice
    pub fn select(&mut self, selection: &FileSelection) -> bool {
        self.verdict = selection.is_valid();
        self.view.show_unsupported_notice(!self.verdict);
        self.verdict
    }

    /// Handle a submission
    ///
    /// On success the controller is `Uploading` and the caller must open
    /// exactly one request of `total_bytes`. On error nothing changed and no
    /// request may be issued.
    pub fn submit(&mut self, total_bytes: u64) -> Result<()> {
        if self.state.is_busy() {
            log::warn!("Submit ignored: upload already {}", self.state);
            return Err(SqueezeError::Busy);
        }

        if !self.verdict {
            self.view.show_unsupported_notice(true);
            return Err(SqueezeError::validation(
                "selection must contain only JPEG or PNG images",
            ));
        }

        self.summary = None;
        self.last_error = None;
        self.view.reset(&ProgressReport::start(total_bytes));
        self.view.set_submit_enabled(false);
        self.transition(UploadState::Uploading);
        Ok(())
    }

    /// Feed one lifecycle event of the outstanding request
    ///
    /// Events that do not apply to the current state are logged and dropped.
    pub fn handle_event(&mut self, event: TransportEvent) -> UploadState {
        match (self.state, event) {
            (UploadState::Uploading, TransportEvent::Progress { loaded, total }) => {
                let progress = report(loaded, total);
                log::trace!("{}", progress.text);
                self.view.show_progress(&progress);
            }
            (UploadState::Uploading, TransportEvent::TransferComplete) => {
                self.view.show_processing();
                self.transition(UploadState::Processing);
            }
            (UploadState::Uploading, TransportEvent::Response { status, body }) => {
                // The server answered before the body was fully consumed.
                log::debug!("Response arrived before transfer completed");
                self.view.show_processing();
                self.transition(UploadState::Processing);
                self.settle(status, &body);
            }
            (UploadState::Processing, TransportEvent::Response { status, body }) => {
                self.settle(status, &body);
            }
            (
                UploadState::Uploading | UploadState::Processing,
                TransportEvent::Failed { reason },
            ) => {
                self.fail(SqueezeError::request_failed(reason));
            }
            (state, event) => {
                log::warn!("Ignoring {:?} while {}", event, state);
            }
        }

        self.state
    }

    fn settle(&mut self, status: u16, body: &str) {
        if status != 200 {
            self.fail(SqueezeError::transport(status));
            return;
        }

        match parse_response(body) {
            Ok(result) => {
                let summary = render(&result);
                self.view.show_summary(&summary);
                self.view.set_submit_enabled(true);
                self.summary = Some(summary);
                self.transition(UploadState::Complete);
            }
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, error: SqueezeError) {
        log::warn!("Upload failed: {}", error);
        self.view.show_error(ERROR_TEXT);
        self.view.set_submit_enabled(true);
        self.last_error = Some(error.to_string());
        self.transition(UploadState::Error);
    }

    fn transition(&mut self, next: UploadState) {
        log::info!("Upload state: {} -> {}", self.state, next);
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MimeType;
    use crate::validate::FileDescriptor;

    #[derive(Default)]
    struct NullView {
        submit_enabled: bool,
        notice: bool,
        errors: usize,
    }

    impl UploadView for NullView {
        fn show_unsupported_notice(&mut self, visible: bool) {
            self.notice = visible;
        }
        fn set_submit_enabled(&mut self, enabled: bool) {
            self.submit_enabled = enabled;
        }
        fn reset(&mut self, _initial: &ProgressReport) {}
        fn show_progress(&mut self, _progress: &ProgressReport) {}
        fn show_processing(&mut self) {}
        fn show_summary(&mut self, _summary: &RenderedSummary) {}
        fn show_error(&mut self, _message: &str) {
            self.errors += 1;
        }
    }

    fn jpeg_selection() -> FileSelection {
        FileSelection::new().with_file(FileDescriptor::new(
            "a.jpg",
            MimeType::new("image/jpeg".into()),
            1000,
        ))
    }

    const OK_BODY: &str = r#"{"result": {"source": {"size": 1000, "url": "s"}, "compressed": {"size": 500, "url": "c"}}}"#;

    #[test]
    fn test_full_cycle() {
        let mut controller = UploadController::new(NullView::default());
        assert!(controller.select(&jpeg_selection()));
        controller.submit(1000).unwrap();
        assert_eq!(controller.state(), UploadState::Uploading);
        assert!(!controller.view().submit_enabled);

        controller.handle_event(TransportEvent::Progress { loaded: 500, total: 1000 });
        assert_eq!(controller.state(), UploadState::Uploading);

        controller.handle_event(TransportEvent::TransferComplete);
        assert_eq!(controller.state(), UploadState::Processing);

        let state = controller.handle_event(TransportEvent::Response {
            status: 200,
            body: OK_BODY.into(),
        });
        assert_eq!(state, UploadState::Complete);
        assert!(controller.view().submit_enabled);
        assert_eq!(controller.summary().unwrap().lossless.diff, 500);
    }

    #[test]
    fn test_submit_without_valid_selection() {
        let mut controller = UploadController::new(NullView::default());
        assert!(matches!(
            controller.submit(10),
            Err(SqueezeError::Validation { .. })
        ));
        assert_eq!(controller.state(), UploadState::Idle);
        assert!(controller.view().notice);

        assert!(!controller.select(&FileSelection::new()));
        assert!(controller.submit(10).is_err());
    }

    #[test]
    fn test_submit_while_busy() {
        let mut controller = UploadController::new(NullView::default());
        controller.select(&jpeg_selection());
        controller.submit(1000).unwrap();
        assert!(matches!(controller.submit(1000), Err(SqueezeError::Busy)));

        controller.handle_event(TransportEvent::TransferComplete);
        assert!(matches!(controller.submit(1000), Err(SqueezeError::Busy)));
    }

    #[test]
    fn test_parse_failure_goes_to_error() {
        let mut controller = UploadController::new(NullView::default());
        controller.select(&jpeg_selection());
        controller.submit(1000).unwrap();
        controller.handle_event(TransportEvent::TransferComplete);
        let state = controller.handle_event(TransportEvent::Response {
            status: 200,
            body: "<html>oops</html>".into(),
        });

        assert_eq!(state, UploadState::Error);
        assert!(controller.summary().is_none());
        assert!(controller.last_error().unwrap().starts_with("Malformed upload response"));
        assert_eq!(controller.view().errors, 1);
    }

    #[test]
    fn test_early_response_and_rearm() {
        let mut controller = UploadController::new(NullView::default());
        controller.select(&jpeg_selection());
        controller.submit(1000).unwrap();
        let state = controller.handle_event(TransportEvent::Response {
            status: 413,
            body: String::new(),
        });
        assert_eq!(state, UploadState::Error);
        assert!(controller.view().submit_enabled);

        controller.submit(1000).unwrap();
        assert_eq!(controller.state(), UploadState::Uploading);
        assert!(controller.last_error().is_none());
    }

    #[test]
    fn test_out_of_order_events_are_ignored() {
        let mut controller = UploadController::new(NullView::default());
        assert_eq!(
            controller.handle_event(TransportEvent::TransferComplete),
            UploadState::Idle
        );

        controller.select(&jpeg_selection());
        controller.submit(1000).unwrap();
        controller.handle_event(TransportEvent::TransferComplete);
        assert_eq!(
            controller.handle_event(TransportEvent::Progress { loaded: 1, total: 2 }),
            UploadState::Processing
        );
    }

    #[test]
    fn test_request_failure() {
        let mut controller = UploadController::new(NullView::default());
        controller.select(&jpeg_selection());
        controller.submit(1000).unwrap();
        let state = controller.handle_event(TransportEvent::Failed {
            reason: "connection refused".into(),
        });
        assert_eq!(state, UploadState::Error);
        assert_eq!(
            controller.last_error(),
            Some("Request failed: connection refused")
        );
    }
}
