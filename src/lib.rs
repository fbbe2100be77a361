pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub mod progress;
pub mod render;
pub mod upload;
pub mod validate;
pub mod view;

pub use config::{ClientConfig, LogLevel};

pub use error::{Result, SqueezeError};

pub use progress::{report, ProgressReport, ProgressStream};

pub use render::{
    compare, parse_response, render, size_format, DownloadLinks, LinkKind, RenderedSummary,
    SizeReport,
};

pub use types::{MimeType, SupportedType};

pub use upload::{
    upload_file, FileDetails, HttpTransport, Transport, TransportEvent, UploadController,
    UploadOutcome, UploadRequest, UploadResponse, UploadResult, UploadState, FILE_FIELD,
    NAME_FIELD, RESPONSE_CONTRACT_VERSION,
};

pub use validate::{is_supported, validate, FileDescriptor, FileSelection, FileUpload};

pub use view::{TerminalView, UploadView, ERROR_TEXT, PROCESSING_TEXT};
