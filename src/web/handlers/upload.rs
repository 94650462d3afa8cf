// src/web/handlers/upload.rs
//! Persists multipart uploads under the uploads directory.

use anyhow::{Context, Result};
use rocket::fs::TempFile;
use std::path::Path;

use crate::utils::{ensure_dir_exists, upload_file_name, upload_url};

/// Move an uploaded file into the uploads directory under a
/// `<timestamp>-<random>.<ext>` name and return its public URL.
/// File metadata is read before `persist_to` consumes the temp handle.
pub async fn store_upload(file: &mut TempFile<'_>, uploads_dir: &Path) -> Result<String> {
    let original_name = file
        .raw_name()
        .map(|name| name.dangerous_unsafe_unsanitized_raw().as_str().to_string());
    let fallback_ext = file
        .content_type()
        .and_then(|ct| ct.extension())
        .map(|ext| ext.as_str().to_lowercase());

    let stored_name = upload_file_name(original_name.as_deref(), fallback_ext.as_deref());

    ensure_dir_exists(uploads_dir).await?;
    let target = uploads_dir.join(&stored_name);

    file.persist_to(&target)
        .await
        .with_context(|| format!("Failed to store upload at {}", target.display()))?;

    Ok(upload_url(&stored_name))
}
