use std::path::Path;

use axum::extract::Multipart;
use base64::Engine;
use bytes::Bytes;
use tempfile::NamedTempFile;
use tracing::debug;

use super::DocumentError;

/// Multipart field that carries the uploaded file.
pub const FILE_FIELD: &str = "file";

pub const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".gif", ".bmp"];

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub data: Bytes,
}

/// Read the `file` field out of a multipart body. Other fields, and a
/// `file` part sent as a plain form value (no `filename`), are skipped.
pub async fn read_file_field(multipart: &mut Multipart) -> Result<UploadedFile, DocumentError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| DocumentError::Multipart(e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let data = field
            .bytes()
            .await
            .map_err(|e| DocumentError::Multipart(e.body_text()))?;

        if filename.is_empty() {
            return Err(DocumentError::EmptyFilename);
        }

        debug!(filename = %filename, size = data.len(), "Received upload");
        return Ok(UploadedFile { filename, data });
    }

    Err(DocumentError::NoFile)
}

/// Case-insensitive image extension check.
pub fn ensure_image(filename: &str) -> Result<(), DocumentError> {
    let lower = filename.to_lowercase();
    if IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
        Ok(())
    } else {
        Err(DocumentError::NotImage)
    }
}

/// PDF uploads must end in a lowercase `.pdf`.
pub fn ensure_pdf(filename: &str) -> Result<(), DocumentError> {
    if filename.ends_with(".pdf") {
        Ok(())
    } else {
        Err(DocumentError::NotPdf)
    }
}

/// Decode the `image_base64` payload of a screenshot request.
pub fn decode_image_base64(encoded: Option<&str>) -> Result<Vec<u8>, DocumentError> {
    let encoded = encoded
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(DocumentError::NoImageData)?;

    // Accept data URLs as produced by canvas.toDataURL()
    let payload = match encoded.split_once(";base64,") {
        Some((prefix, data)) if prefix.starts_with("data:") => data,
        _ => encoded,
    };

    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|_| DocumentError::InvalidBase64)
}

/// Write bytes to a temporary file. The file is removed when the handle drops.
pub async fn stage(data: &[u8], suffix: &str) -> Result<NamedTempFile, DocumentError> {
    let file = tempfile::Builder::new()
        .prefix("upload-")
        .suffix(suffix)
        .tempfile()?;
    tokio::fs::write(file.path(), data).await?;
    Ok(file)
}

/// Extension of `filename` including the dot, or an empty string.
pub fn suffix_of(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}
