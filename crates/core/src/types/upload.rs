use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A file accepted by the upload route.
///
/// Only the bytes on disk are persisted; this record lives for the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Random prefix joined to the original name with `_`.
    pub filename: String,
    pub path: PathBuf,
    pub url: String,
}

/// Reply to `POST /upload`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadResponse {
    pub success: bool,
    pub filename: String,
    pub url: String,
}

impl From<UploadedFile> for UploadResponse {
    fn from(file: UploadedFile) -> Self {
        Self {
            success: true,
            filename: file.filename,
            url: file.url,
        }
    }
}
