//! HTTP transport for upload requests
//!
//! A transport opens exactly one request and reports its lifecycle as
//! [`TransportEvent`]s on the supplied channel. It never returns results
//! directly; the controller learns everything from the events.

use crate::error::Result;
use crate::progress::ProgressStream;
use crate::upload::types::TransportEvent;
use crate::validate::FileUpload;
use futures::channel::mpsc::UnboundedSender;
use reqwest::multipart::{Form, Part};
use std::future::Future;

/// Multipart field carrying the file content
pub const FILE_FIELD: &str = "upload[file]";

/// Multipart field carrying the original file name
pub const NAME_FIELD: &str = "upload[name]";

/// Default number of bytes per progress tick
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// One upload request: where to send it and what
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub url: String,
    pub file: FileUpload,
    pub chunk_size: usize,
}

impl UploadRequest {
    pub fn new(url: impl Into<String>, file: FileUpload) -> Self {
        Self {
            url: url.into(),
            file,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }
}

/// Something that can carry an upload request to the server
///
/// Implementations must deliver events in order: progress ticks, then a
/// single `TransferComplete`, then a single `Response` (or `Failed`).
pub trait Transport {
    fn send(
        &self,
        request: UploadRequest,
        events: UnboundedSender<TransportEvent>,
    ) -> impl Future<Output = ()>;
}

/// [`Transport`] over HTTP using `reqwest`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with a default client
    ///
    /// No request timeout is set: an upload runs until the server answers
    /// or the connection fails.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("squeeze-upload/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Create a transport around an existing client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn execute(
        &self,
        request: UploadRequest,
        events: &UnboundedSender<TransportEvent>,
    ) -> Result<(u16, String)> {
        let UploadRequest {
            url,
            file,
            chunk_size,
        } = request;
        let descriptor = file.descriptor;

        let body = ProgressStream::new(file.data, chunk_size, events.clone());
        let total = body.total_bytes();
        let part = Part::stream_with_length(reqwest::Body::wrap_stream(body), total)
            .file_name(descriptor.name.clone())
            .mime_str(descriptor.mime_type.as_str())?;

        let form = Form::new()
            .part(FILE_FIELD, part)
            .text(NAME_FIELD, descriptor.name);

        log::debug!("POST {} ({} bytes)", url, total);

        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        log::debug!("Response from {}: HTTP {}, {} bytes", url, status, body.len());
        Ok((status, body))
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: UploadRequest, events: UnboundedSender<TransportEvent>) {
        let event = match self.execute(request, &events).await {
            Ok((status, body)) => TransportEvent::Response { status, body },
            Err(e) => TransportEvent::Failed {
                reason: e.to_string(),
            },
        };

        if events.unbounded_send(event).is_err() {
            log::debug!("Upload listener went away before the response arrived");
        }
    }
}
