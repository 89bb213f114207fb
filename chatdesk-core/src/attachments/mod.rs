//! Attachment directory client
//!
//! Mirrors a remote flat namespace of uploaded files. The listing is always
//! server truth: nothing is inserted locally, every view comes from a fresh
//! fetch.

mod directory;

pub use directory::{AttachmentDirectory, UploadOutcome};

use crate::error::ClientError;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// One entry of the remote listing, keyed by `name`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    /// Size in bytes
    #[serde(default, deserialize_with = "null_as_zero")]
    pub size: u64,
    /// Retrieval locator (pre-signed URL for blob-backed stores)
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(0))
}

impl Attachment {
    /// Size rounded to whole KiB
    pub fn size_kb(&self) -> u64 {
        (self.size as f64 / 1024.0).round() as u64
    }
}

/// What the store reports after an upload. Only used for logging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub blob_name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

/// A file ready to be sent as a single multipart part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Read a file from disk, guessing its MIME type from the extension
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ClientError::upload(format!("invalid file name: {}", path.display())))?
            .to_string();

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ClientError::upload(format!("failed to read {}: {e}", path.display())))?;

        Ok(Self {
            content_type: guess_content_type(&name),
            name,
            bytes,
        })
    }

}

/// Guess a MIME type from the file extension
pub fn guess_content_type(file_name: &str) -> String {
    mime_guess::from_path(file_name)
        .first_or_octet_stream()
        .to_string()
}
