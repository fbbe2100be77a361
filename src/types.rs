//! Type-safe wrappers for MIME types

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Fallback used when a file's content cannot be identified
pub const OCTET_STREAM: &str = "application/octet-stream";

/// An image format the compression service accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportedType {
    #[serde(rename = "image/jpeg")]
    Jpeg,
    #[serde(rename = "image/png")]
    Png,
}

impl SupportedType {
    /// Every accepted format, in the order they are advertised
    pub const ALL: [SupportedType; 2] = [SupportedType::Jpeg, SupportedType::Png];

    /// The MIME string for this format
    pub fn mime(&self) -> &'static str {
        match self {
            SupportedType::Jpeg => "image/jpeg",
            SupportedType::Png => "image/png",
        }
    }

    /// Look up a format by exact MIME string
    pub fn from_mime(mime: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.mime() == mime)
    }
}

impl Display for SupportedType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

/// A MIME type string such as `image/jpeg`
///
/// Stored as given; whether the type can be uploaded is decided by the
/// validator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MimeType(String);

impl MimeType {
    /// Creates a new MIME type from a string without validation
    pub fn new(mime: String) -> Self {
        Self(mime)
    }

    /// The generic binary type
    pub fn octet_stream() -> Self {
        Self(OCTET_STREAM.to_string())
    }

    /// Returns the MIME type as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The accepted format this MIME type names, if any
    pub fn supported(&self) -> Option<SupportedType> {
        SupportedType::from_mime(&self.0)
    }
}

impl Display for MimeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MimeType {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<SupportedType> for MimeType {
    fn from(t: SupportedType) -> Self {
        Self(t.mime().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_mime() {
        let mime = MimeType::from(SupportedType::Png);
        assert_eq!(mime.as_str(), "image/png");
        assert_eq!(mime.supported(), Some(SupportedType::Png));
    }

    #[test]
    fn test_unsupported_mime() {
        let mime = MimeType::new("image/gif".to_string());
        assert_eq!(mime.supported(), None);
        assert_eq!(MimeType::octet_stream().supported(), None);
        assert_eq!(MimeType::octet_stream().to_string(), OCTET_STREAM);
    }

    #[test]
    fn test_supported_type_lookup() {
        assert_eq!(
            SupportedType::from_mime("image/jpeg"),
            Some(SupportedType::Jpeg)
        );
        assert_eq!(SupportedType::from_mime("image/webp"), None);
        assert_eq!(SupportedType::from_mime("IMAGE/PNG"), None);
        assert_eq!(SupportedType::Png.to_string(), "image/png");
    }
}
