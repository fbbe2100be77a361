//! Progress-tracking request body
//!
//! Wraps the file bytes in a chunked stream and emits a transport event
//! each time a chunk is handed to the HTTP client.

use crate::upload::types::TransportEvent;
use futures::channel::mpsc::UnboundedSender;
use futures::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};

/// A stream over file bytes that reports how much of it has been consumed
///
/// Emits `Progress` after every chunk and a single `TransferComplete` once
/// the data is exhausted. Counts reflect what the HTTP client has pulled
/// from the body, which is as close to "sent" as the client exposes.
pub struct ProgressStream {
    data: Vec<u8>,
    offset: usize,
    chunk_size: usize,
    events: UnboundedSender<TransportEvent>,
    finished: bool,
}

impl ProgressStream {
    /// Create a new progress stream
    ///
    /// # Arguments
    ///
    /// * `data` - The bytes to send
    /// * `chunk_size` - Bytes per chunk, which sets the progress granularity
    /// * `events` - Where progress and completion events are delivered
    pub fn new(data: Vec<u8>, chunk_size: usize, events: UnboundedSender<TransportEvent>) -> Self {
        Self {
            data,
            offset: 0,
            chunk_size: chunk_size.max(1),
            events,
            finished: false,
        }
    }

    /// Total number of bytes in the stream
    pub fn total_bytes(&self) -> u64 {
        self.data.len() as u64
    }

    fn emit(&self, event: TransportEvent) {
        // The receiver only goes away once the upload has already settled.
        if self.events.unbounded_send(event).is_err() {
            log::trace!("Progress receiver dropped");
        }
    }
}

impl Stream for ProgressStream {
    type Item = std::io::Result<Vec<u8>>;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        if this.offset >= this.data.len() {
            if !this.finished {
                this.finished = true;
                this.emit(TransportEvent::TransferComplete);
            }
            return Poll::Ready(None);
        }

        let end = (this.offset + this.chunk_size).min(this.data.len());
        let chunk = this.data[this.offset..end].to_vec();
        this.offset = end;

        this.emit(TransportEvent::Progress {
            loaded: this.offset as u64,
            total: this.data.len() as u64,
        });

        Poll::Ready(Some(Ok(chunk)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.data.len() - self.offset).div_ceil(self.chunk_size);
        (remaining, Some(remaining))
    }
}
