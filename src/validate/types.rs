//! Types describing the files a user selected

use crate::error::{Result, SqueezeError};
use crate::types::MimeType;
use crate::validate::operations::{sniff_mime, validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::io::AsyncReadExt;

/// A candidate file: name, content type and byte length
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// Original file name, sent as `upload[name]`
    pub name: String,
    /// MIME type of the content
    pub mime_type: MimeType,
    /// Size in bytes
    pub size: u64,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, mime_type: MimeType, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type,
            size,
        }
    }

    /// Describe a file on disk without loading all of it
    ///
    /// Only the leading bytes are read to sniff the content type.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = file_name(path).await?;

        let mut file = tokio::fs::File::open(path).await?;
        let size = file.metadata().await?.len();

        let mut header = Vec::with_capacity(SNIFF_LEN);
        (&mut file).take(SNIFF_LEN as u64).read_to_end(&mut header).await?;

        Ok(Self::new(name, sniff_mime(&header), size))
    }

    /// Get a human-readable size string
    pub fn size_string(&self) -> String {
        bytesize::ByteSize::b(self.size).to_string()
    }
}

/// Bytes read from the start of a file for content sniffing
const SNIFF_LEN: usize = 8192;

async fn file_name(path: &Path) -> Result<String> {
    let is_file = tokio::fs::metadata(path)
        .await
        .map(|metadata| metadata.is_file())
        .unwrap_or(false);

    if !is_file {
        return Err(SqueezeError::invalid_parameter(
            "path",
            format!("File does not exist: {}", path.display()),
        ));
    }

    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| {
            SqueezeError::invalid_parameter(
                "path",
                format!("Path has no usable file name: {}", path.display()),
            )
        })
}

/// An ordered set of candidate files
///
/// Replaced wholesale on every new selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSelection {
    files: Vec<FileDescriptor>,
}

impl FileSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to the selection
    pub fn with_file(mut self, file: FileDescriptor) -> Self {
        self.files.push(file);
        self
    }

    pub fn files(&self) -> &[FileDescriptor] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// The upload verdict for this selection
    pub fn is_valid(&self) -> bool {
        validate(&self.files)
    }
}

impl From<Vec<FileDescriptor>> for FileSelection {
    fn from(files: Vec<FileDescriptor>) -> Self {
        Self { files }
    }
}

impl FromIterator<FileDescriptor> for FileSelection {
    fn from_iter<I: IntoIterator<Item = FileDescriptor>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}

/// A file loaded into memory and ready to be sent
#[derive(Clone)]
pub struct FileUpload {
    pub descriptor: FileDescriptor,
    pub data: Vec<u8>,
}

impl std::fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileUpload")
            .field("descriptor", &self.descriptor)
            .field("data", &format_args!("<{} bytes>", self.data.len()))
            .finish()
    }
}

impl FileUpload {
    /// Build an upload from in-memory bytes, sniffing the MIME type
    pub fn from_bytes(name: impl Into<String>, data: Vec<u8>) -> Self {
        let mime_type = sniff_mime(&data);
        let descriptor = FileDescriptor::new(name, mime_type, data.len() as u64);
        Self { descriptor, data }
    }

    /// Read a file from disk
    ///
    /// The MIME type comes from the file's content, not its extension.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = file_name(path).await?;

        let data = tokio::fs::read(path).await?;
        let upload = Self::from_bytes(name, data);

        log::debug!(
            "Loaded {} ({}, {})",
            upload.descriptor.name,
            upload.descriptor.mime_type,
            upload.descriptor.size_string()
        );

        Ok(upload)
    }

    /// A single-file selection describing this upload
    pub fn selection(&self) -> FileSelection {
        FileSelection::new().with_file(self.descriptor.clone())
    }
}
