//! Upload operations implementation

use crate::config::ClientConfig;
use crate::error::Result;
use crate::upload::controller::UploadController;
use crate::upload::transport::{Transport, UploadRequest};
use crate::upload::types::{TransportEvent, UploadOutcome, UploadState};
use crate::validate::FileUpload;
use crate::view::UploadView;
use futures::channel::mpsc;
use futures::StreamExt;
use std::time::Instant;

/// Upload a file through `controller` and wait for the attempt to settle
///
/// The selection is validated first; an unsupported file returns a
/// validation error and no request is opened. Once a request is open, its
/// failures are reported through the view and the returned outcome rather
/// than as `Err`.
///
/// The transport and the event loop run concurrently on the calling task,
/// so events are handled in exactly the order the transport emits them.
///
/// # Arguments
///
/// * `controller` - The state machine and its view
/// * `transport` - Carries the request to the server
/// * `config` - Endpoint and progress settings
/// * `file` - The file to send
pub async fn upload_file<T, V>(
    controller: &mut UploadController<V>,
    transport: &T,
    config: &ClientConfig,
    file: FileUpload,
) -> Result<UploadOutcome>
where
    T: Transport,
    V: UploadView,
{
    config.validate()?;

    controller.select(&file.selection());
    controller.submit(file.descriptor.size)?;

    let start_time = Instant::now();
    log::info!(
        "Uploading {} ({}, {}) to {}",
        file.descriptor.name,
        file.descriptor.mime_type,
        file.descriptor.size_string(),
        config.upload_url()
    );

    let (tx, mut rx) = mpsc::unbounded();
    let request = UploadRequest::new(config.upload_url(), file).chunk_size(config.chunk_size);

    let send = transport.send(request, tx);
    let drive = async {
        while let Some(event) = rx.next().await {
            if controller.handle_event(event).is_terminal() {
                break;
            }
        }
    };
    futures::join!(send, drive);

    if controller.state().is_busy() {
        controller.handle_event(TransportEvent::Failed {
            reason: "transport finished without a response".to_string(),
        });
    }

    let duration = start_time.elapsed();
    let state = controller.state();

    if state == UploadState::Complete {
        log::info!("Upload finished in {} ms", duration.as_millis());
    }

    Ok(UploadOutcome {
        state,
        summary: controller.summary().cloned(),
        error: controller.last_error().map(str::to_string),
        duration_ms: duration.as_millis() as u64,
    })
}
