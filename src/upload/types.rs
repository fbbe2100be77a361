use crate::error::{Result, SqueezeError};
use crate::render::RenderedSummary;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Version of the response contract this client understands
///
/// Version 2 wraps the file details in a `result` object. The unwrapped
/// version 1 shape is rejected as malformed.
pub const RESPONSE_CONTRACT_VERSION: u32 = 2;

/// Where an upload attempt currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadState {
    #[default]
    Idle,
    Uploading,
    Processing,
    Complete,
    Error,
}

impl UploadState {
    /// A request is in flight; submissions are refused
    pub fn is_busy(&self) -> bool {
        matches!(self, UploadState::Uploading | UploadState::Processing)
    }

    /// The last attempt has settled
    pub fn is_terminal(&self) -> bool {
        matches!(self, UploadState::Complete | UploadState::Error)
    }
}

impl fmt::Display for UploadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadState::Idle => write!(f, "idle"),
            UploadState::Uploading => write!(f, "uploading"),
            UploadState::Processing => write!(f, "processing"),
            UploadState::Complete => write!(f, "complete"),
            UploadState::Error => write!(f, "error"),
        }
    }
}

/// Lifecycle notifications for the single outstanding request
///
/// A transport delivers zero or more `Progress` events, then one
/// `TransferComplete`, then one `Response`. `Failed` replaces the response
/// when no HTTP answer was received at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    Progress { loaded: u64, total: u64 },
    TransferComplete,
    Response { status: u16, body: String },
    Failed { reason: String },
}

/// Size and download location of one stored file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDetails {
    pub size: u64,
    pub url: String,
}

impl FileDetails {
    pub fn new(size: u64, url: impl Into<String>) -> Self {
        Self {
            size,
            url: url.into(),
        }
    }
}

/// Compression results returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    /// The file as uploaded
    pub source: FileDetails,
    /// Losslessly compressed variant
    pub compressed: FileDetails,
    /// Lossy variant, when the server produced one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lossy: Option<FileDetails>,
    /// MIME type the server detected
    #[serde(rename = "fileType", default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
}

impl UploadResult {
    pub fn new(source: FileDetails, compressed: FileDetails) -> Self {
        Self {
            source,
            compressed,
            lossy: None,
            file_type: None,
        }
    }

    pub fn lossy(mut self, lossy: FileDetails) -> Self {
        self.lossy = Some(lossy);
        self
    }

    pub fn file_type(mut self, file_type: impl Into<String>) -> Self {
        self.file_type = Some(file_type.into());
        self
    }
}

/// Error details the server may attach to a response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = self.message.as_deref().unwrap_or("unknown error");
        match (&self.kind, &self.detail) {
            (Some(kind), Some(detail)) => write!(f, "{} ({}): {}", message, kind, detail),
            (Some(kind), None) => write!(f, "{} ({})", message, kind),
            (None, Some(detail)) => write!(f, "{}: {}", message, detail),
            (None, None) => write!(f, "{}", message),
        }
    }
}

/// The response envelope, contract version 2
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<UploadResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ResponseError>,
}

impl UploadResponse {
    /// Wrap a successful result
    pub fn success(result: UploadResult) -> Self {
        Self {
            success: Some(true),
            result: Some(result),
            error: None,
        }
    }

    /// Parse a response body
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| SqueezeError::response_parse(e.to_string()))
    }

    /// Convert the envelope to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(SqueezeError::from)
    }

    /// Extract the result, turning server-reported errors into `Server`
    pub fn into_result(self) -> Result<UploadResult> {
        if let Some(error) = self.error {
            return Err(SqueezeError::server(error.to_string()));
        }

        if self.success == Some(false) {
            return Err(SqueezeError::server("server reported failure"));
        }

        self.result.ok_or_else(|| {
            SqueezeError::response_parse(format!(
                "missing `result` object (expected contract v{})",
                RESPONSE_CONTRACT_VERSION
            ))
        })
    }
}

/// What a finished upload attempt produced
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    /// State the controller settled in
    pub state: UploadState,
    /// Rendered summary, present when the upload completed
    pub summary: Option<RenderedSummary>,
    /// Why the attempt failed, present when it ended in `Error`
    pub error: Option<String>,
    /// Wall time from submission to settlement
    pub duration_ms: u64,
}

impl UploadOutcome {
    pub fn is_complete(&self) -> bool {
        self.state == UploadState::Complete
    }
}
