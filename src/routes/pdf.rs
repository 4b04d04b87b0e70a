use axum::{
    extract::{multipart::MultipartRejection, Multipart},
    routing::post,
    Json, Router,
};
use tracing::{debug, info};

use crate::documents::{ensure_pdf, extract_pdf_pages, read_file_field, stage, DocumentError};
use crate::models::{AnswerResponse, PdfExtractResponse, PdfQuestionRequest};
use crate::routes::extract::LenientJson;
use crate::types::AppResult;

pub fn router() -> Router {
    Router::new()
        .route("/api/pdf/extract", post(extract_pdf))
        .route("/api/pdf/answer", post(answer_pdf))
}

/// POST /api/pdf/extract - multipart `file` ending in `.pdf`
async fn extract_pdf(
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<PdfExtractResponse>> {
    let mut multipart = multipart.map_err(|_| DocumentError::NoFile)?;
    let upload = read_file_field(&mut multipart).await?;
    ensure_pdf(&upload.filename)?;

    let staged = stage(&upload.data, ".pdf").await?;
    info!(filename = %upload.filename, size = upload.data.len(), "Extracting PDF");

    let pages = extract_pdf_pages(staged.path().to_path_buf()).await?;

    Ok(Json(PdfExtractResponse {
        message: "PDF processed successfully".to_string(),
        pages,
    }))
}

/// POST /api/pdf/answer - simulated answer echoing the question
async fn answer_pdf(
    LenientJson(request): LenientJson<PdfQuestionRequest>,
) -> AppResult<Json<AnswerResponse>> {
    let question = request.question.unwrap_or_default();
    debug!(context_len = request.context.len(), "PDF question received");

    Ok(Json(AnswerResponse {
        message: "PDF question answered successfully".to_string(),
        answer: format!(
            "This is a simulated answer to your question: '{}'. In a complete implementation, this would use AI to analyze the PDF content and provide a relevant answer.",
            question
        ),
    }))
}
