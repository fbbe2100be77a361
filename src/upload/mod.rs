//! Upload workflow
//!
//! This module owns the upload state machine, the transport that carries a
//! single multipart request, and the driver that wires the two together.

pub mod controller;
pub mod operations;
pub mod transport;
pub mod types;

pub use controller::UploadController;
pub use operations::upload_file;
pub use transport::{HttpTransport, Transport, UploadRequest, FILE_FIELD, NAME_FIELD};
pub use types::{
    FileDetails, ResponseError, TransportEvent, UploadOutcome, UploadResponse, UploadResult,
    UploadState, RESPONSE_CONTRACT_VERSION,
};
