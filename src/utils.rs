// src/utils.rs
use anyhow::{Context, Result};
use rand::Rng;
use std::path::Path;

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Build a unique name for an uploaded file: `<timestamp>-<random>.<ext>`.
/// The extension comes from the client-supplied filename when it carries a
/// clean one, else from `fallback_ext` (derived from the content type).
/// Only alphanumeric extensions are kept; the rest of the client name is
/// discarded entirely.
pub fn upload_file_name(original: Option<&str>, fallback_ext: Option<&str>) -> String {
    let stamp = chrono::Utc::now().timestamp_millis();
    let noise: u32 = rand::thread_rng().gen_range(0..1_000_000_000);

    let ext = original
        .and_then(get_file_extension)
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .or_else(|| fallback_ext.map(|ext| ext.to_string()));

    match ext {
        Some(ext) => format!("{}-{}.{}", stamp, noise, ext),
        None => format!("{}-{}", stamp, noise),
    }
}

/// Public URL under which a stored upload is served back
pub fn upload_url(stored_name: &str) -> String {
    format!("/uploads/{}", stored_name)
}

/// Ensure directory exists
pub async fn ensure_dir_exists(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path)
        .await
        .with_context(|| format!("Failed to create directory: {}", path.display()))
}
