//! `POST /upload`: multipart file intake.
//!
//! Files land in the configured upload directory under a random prefix so
//! two uploads with the same name never collide. Nothing is written unless
//! every check has passed.

use std::path::Path;
use std::sync::Arc;

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::Json;
use uuid::Uuid;

use travel_assistant_core::config::UploadConfig;
use travel_assistant_core::{Error, Result, UploadResponse, UploadedFile};

use crate::error::ApiError;
use crate::server::AppState;

/// Multipart field that carries the file.
pub const FILE_FIELD: &str = "file";

/// Longest file name most filesystems accept, in bytes.
const MAX_STORED_NAME_BYTES: usize = 255;

/// Longest client name that still fits once the `<uuid>_` prefix is added.
pub const MAX_ORIGINAL_NAME_BYTES: usize = MAX_STORED_NAME_BYTES - 37;

pub async fn upload_handler(
    State(state): State<Arc<AppState>>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> std::result::Result<Json<UploadResponse>, ApiError> {
    let mut multipart = multipart?;
    let upload = &state.config.upload;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let original = field
            .file_name()
            .and_then(sanitize_filename)
            .ok_or_else(|| Error::upload("No selected file"))?;

        if original.len() > MAX_ORIGINAL_NAME_BYTES {
            tracing::debug!(bytes = original.len(), "Rejected upload with overlong filename");
            return Err(Error::upload("Filename too long").into());
        }

        if !upload.allows(&original) {
            tracing::debug!(filename = %original, "Rejected upload with disallowed extension");
            return Err(Error::upload("File type not allowed").into());
        }

        let data = field.bytes().await?;
        let stored = store_upload(upload, &original, &data).await?;

        tracing::info!(
            filename = %stored.filename,
            bytes = data.len(),
            "Stored upload"
        );
        return Ok(Json(stored.into()));
    }

    Err(Error::upload("No file part").into())
}

/// Reduce a client-supplied name to its final path component.
///
/// Returns `None` when nothing usable is left.
pub fn sanitize_filename(raw: &str) -> Option<String> {
    let name = raw.rsplit(['/', '\\']).next().unwrap_or_default().trim();
    match name {
        "" | "." | ".." => None,
        _ => Some(name.to_string()),
    }
}

/// Write `data` under a fresh `<uuid>_<original>` name.
pub async fn store_upload(config: &UploadConfig, original: &str, data: &[u8]) -> Result<UploadedFile> {
    prepare_upload_dir(&config.dir).await?;

    let filename = format!("{}_{}", Uuid::new_v4(), original);
    let path = config.dir.join(&filename);
    let url = config.public_url(&filename)?;
    tokio::fs::write(&path, data).await?;

    Ok(UploadedFile {
        url,
        filename,
        path,
    })
}

/// Create the upload directory if it does not exist yet.
pub async fn prepare_upload_dir(dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dir).await.map_err(|e| {
        Error::internal(format!(
            "Failed to create upload directory {}: {}",
            dir.display(),
            e
        ))
    })
}
