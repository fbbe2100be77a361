//! Error handling for the upload client
//!
//! Every failure is local to a single upload attempt. The controller turns
//! them into view updates and re-arms; none of them abort the process.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SqueezeError>;

/// Error types that can occur while validating, uploading or rendering
#[derive(Error, Debug)]
pub enum SqueezeError {
    /// The file selection is empty or contains an unsupported MIME type
    #[error("Unsupported selection: {message}")]
    Validation { message: String },

    /// A submission arrived while a request was still in flight
    #[error("An upload is already in progress")]
    Busy,

    /// The server answered with a status other than 200
    #[error("Upload failed with HTTP status {status}")]
    Transport { status: u16 },

    /// The request never produced an HTTP response
    #[error("Request failed: {reason}")]
    RequestFailed { reason: String },

    /// The success body did not match the response contract
    #[error("Malformed upload response: {message}")]
    ResponseParse { message: String },

    /// The server reported an error inside the response envelope
    #[error("Server error: {message}")]
    Server { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid parameter
    #[error("Invalid parameter: {parameter} - {message}")]
    InvalidParameter { parameter: String, message: String },

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SqueezeError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        SqueezeError::Validation {
            message: message.into(),
        }
    }

    /// Create a new transport error from an HTTP status code
    pub fn transport(status: u16) -> Self {
        SqueezeError::Transport { status }
    }

    /// Create a new request failure
    pub fn request_failed(reason: impl Into<String>) -> Self {
        SqueezeError::RequestFailed {
            reason: reason.into(),
        }
    }

    /// Create a new response parse error
    pub fn response_parse(message: impl Into<String>) -> Self {
        SqueezeError::ResponseParse {
            message: message.into(),
        }
    }

    /// Create a new server error
    pub fn server(message: impl Into<String>) -> Self {
        SqueezeError::Server {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        SqueezeError::Config {
            message: message.into(),
        }
    }

    /// Create a new invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        SqueezeError::InvalidParameter {
            parameter: parameter.into(),
            message: message.into(),
        }
    }
}
