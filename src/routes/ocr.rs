use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    routing::post,
    Json, Router,
};
use tracing::info;

use crate::documents::{decode_image_base64, ensure_image, read_file_field, stage, suffix_of, DocumentError};
use crate::models::{AppState, OcrResponse, ScreenshotRequest};
use crate::routes::extract::LenientJson;
use crate::services::OcrSource;
use crate::types::{AppError, AppResult};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/ocr/image", post(ocr_image))
        .route("/api/ocr/screenshot", post(ocr_screenshot))
        .with_state(state)
}

/// POST /api/ocr/image - multipart `file` with an image extension
async fn ocr_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<OcrResponse>> {
    let mut multipart = multipart.map_err(|_| DocumentError::NoFile)?;
    let upload = read_file_field(&mut multipart).await?;
    ensure_image(&upload.filename)?;

    let staged = stage(&upload.data, &suffix_of(&upload.filename)).await?;
    info!(filename = %upload.filename, size = upload.data.len(), "OCR image upload staged");

    let output = state
        .services
        .ocr
        .recognize(staged.path(), OcrSource::Image)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to process image: {}", e)))?;

    Ok(Json(OcrResponse {
        message: "Image processed successfully".to_string(),
        text: output.text,
        blocks: output.blocks,
    }))
}

/// POST /api/ocr/screenshot - JSON `{image_base64}`
async fn ocr_screenshot(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<ScreenshotRequest>,
) -> AppResult<Json<OcrResponse>> {
    let image = decode_image_base64(request.image_base64.as_deref())?;
    let staged = stage(&image, ".png").await?;
    info!(size = image.len(), "OCR screenshot staged");

    let output = state
        .services
        .ocr
        .recognize(staged.path(), OcrSource::Screenshot)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to process screenshot: {}", e)))?;

    Ok(Json(OcrResponse {
        message: "Screenshot processed successfully".to_string(),
        text: output.text,
        blocks: output.blocks,
    }))
}
