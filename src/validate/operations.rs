//! Validation operations implementation

use crate::types::{MimeType, SupportedType};
use crate::validate::types::FileDescriptor;

/// Check a single MIME string against the accepted [`SupportedType`]s
pub fn is_supported(mime: &str) -> bool {
    SupportedType::from_mime(mime).is_some()
}

/// Decide whether a selection may be uploaded
///
/// The selection is acceptable only when it is non-empty and every file has a
/// supported MIME type. An empty selection is always rejected.
pub fn validate(selection: &[FileDescriptor]) -> bool {
    if selection.is_empty() {
        log::debug!("Rejecting empty selection");
        return false;
    }

    match selection
        .iter()
        .find(|file| file.mime_type.supported().is_none())
    {
        Some(file) => {
            log::debug!(
                "Rejecting selection: {} has unsupported type {}",
                file.name,
                file.mime_type
            );
            false
        }
        None => true,
    }
}

/// Identify a file's MIME type from its leading bytes
///
/// Falls back to `application/octet-stream` when the content is not
/// recognised, which the validator then rejects.
pub fn sniff_mime(data: &[u8]) -> MimeType {
    match infer::get(data) {
        Some(kind) => MimeType::new(kind.mime_type().to_string()),
        None => MimeType::octet_stream(),
    }
}
