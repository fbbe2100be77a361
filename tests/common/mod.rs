//! Shared fixtures for the integration tests

#![allow(dead_code)]

use futures::channel::mpsc::UnboundedSender;
use squeeze_upload::{
    FileUpload, LinkKind, ProgressReport, RenderedSummary, Transport, TransportEvent,
    UploadRequest, UploadView,
};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// A view that keeps the visible state of every UI sink
#[derive(Debug)]
pub struct RecordingView {
    pub status: String,
    pub progress_width: Option<f64>,
    pub notice_visible: bool,
    pub submit_enabled: bool,
    pub links: BTreeMap<String, String>,
    pub progress_history: Vec<f64>,
}

impl Default for RecordingView {
    fn default() -> Self {
        Self {
            status: String::new(),
            progress_width: None,
            notice_visible: false,
            submit_enabled: true,
            links: BTreeMap::new(),
            progress_history: Vec::new(),
        }
    }
}

impl RecordingView {
    pub fn link(&self, kind: LinkKind) -> Option<&str> {
        self.links.get(&kind.to_string()).map(String::as_str)
    }
}

impl UploadView for RecordingView {
    fn show_unsupported_notice(&mut self, visible: bool) {
        self.notice_visible = visible;
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn reset(&mut self, initial: &ProgressReport) {
        self.links.clear();
        self.progress_history.clear();
        self.status = initial.text.clone();
        self.progress_width = Some(initial.percent);
    }

    fn show_progress(&mut self, progress: &ProgressReport) {
        self.status = progress.text.clone();
        self.progress_width = Some(progress.percent);
        self.progress_history.push(progress.percent);
    }

    fn show_processing(&mut self) {
        self.status = squeeze_upload::PROCESSING_TEXT.to_string();
        self.progress_width = None;
    }

    fn show_summary(&mut self, summary: &RenderedSummary) {
        self.status = summary.status_text();
        for (kind, url) in summary.links.visible() {
            self.links.insert(kind.to_string(), url.to_string());
        }
    }

    fn show_error(&mut self, message: &str) {
        self.status = message.to_string();
    }
}

/// A transport that replays a fixed list of events and counts requests
pub struct ScriptedTransport {
    events: Vec<TransportEvent>,
    pub requests: RefCell<Vec<UploadRequest>>,
}

impl ScriptedTransport {
    pub fn new(events: Vec<TransportEvent>) -> Self {
        Self {
            events,
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Progress ticks in `steps` equal parts, transfer completion, then
    /// the given response
    pub fn responding(total: u64, steps: u64, status: u16, body: &str) -> Self {
        let mut events: Vec<TransportEvent> = (1..=steps)
            .map(|i| TransportEvent::Progress {
                loaded: total * i / steps,
                total,
            })
            .collect();
        events.push(TransportEvent::TransferComplete);
        events.push(TransportEvent::Response {
            status,
            body: body.to_string(),
        });
        Self::new(events)
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: UploadRequest, events: UnboundedSender<TransportEvent>) {
        self.requests.borrow_mut().push(request);
        for event in self.events.iter().cloned() {
            let _ = events.unbounded_send(event);
        }
    }
}

/// A JPEG-looking payload of `len` bytes
pub fn jpeg_upload(name: &str, len: usize) -> FileUpload {
    let mut data = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];
    data.resize(len.max(data.len()), 0xAB);
    FileUpload::from_bytes(name, data)
}

/// A GIF-looking payload
pub fn gif_upload(name: &str) -> FileUpload {
    let mut data = b"GIF89a".to_vec();
    data.resize(64, 0);
    FileUpload::from_bytes(name, data)
}

pub const LOSSLESS_BODY: &str = r#"{
    "success": true,
    "result": {
        "source": {"size": 1000, "url": "/uploads/abc/source.jpg"},
        "compressed": {"size": 500, "url": "/uploads/abc/lossless.jpg"},
        "fileType": "image/jpeg"
    }
}"#;

pub const LOSSY_BODY: &str = r#"{
    "success": true,
    "result": {
        "source": {"size": 1000, "url": "/uploads/abc/source.jpg"},
        "compressed": {"size": 800, "url": "/uploads/abc/lossless.jpg"},
        "lossy": {"size": 250, "url": "/uploads/abc/lossy.jpg"}
    }
}"#;
