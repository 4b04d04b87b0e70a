//! API Routes
//!
//! This module organizes all HTTP endpoints for the application:
//! - `/` and `/api/health` - Liveness
//! - `/process` - Generation task dispatch
//! - `/api/llm/*` - Per-task generation endpoints (same dispatcher)
//! - `/api/auth/*` - Static token and capabilities
//! - `/api/ocr/*` - Image and screenshot OCR
//! - `/api/pdf/*` - PDF text extraction and questions
//! - `/api/rag/*` - Retrieval endpoints
//! - `/api/speech/*` - Speech-to-text and text-to-speech
//! - `/api/translate/*` - Translation
//! - `/api/youtube/*` - Video transcripts, ASR, summary, Q&A

pub mod auth;
pub mod extract;
pub mod health;
pub mod llm;
pub mod ocr;
pub mod pdf;
pub mod process;
pub mod rag;
pub mod speech;
pub mod translate;
pub mod youtube;

use axum::{extract::DefaultBodyLimit, Router};
use crate::middleware::{apply_cors, apply_tracing};
use crate::models::AppState;
use tracing::info;

/// Create the main application router
///
/// Every route family is merged into one router, then wrapped with the
/// upload size limit, CORS and request tracing.
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let max_upload_bytes = state.config.uploads.max_upload_bytes;
    let allowed_origins = state.config.server.cors_allowed_origins.clone();

    let router = Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(process::router(state.clone()))
        .merge(llm::router(state.clone()))
        .merge(ocr::router(state.clone()))
        .merge(pdf::router())
        .merge(rag::router(state.clone()))
        .merge(speech::router(state.clone()))
        .merge(translate::router(state.clone()))
        .merge(youtube::router(state))
        .layer(DefaultBodyLimit::max(max_upload_bytes));

    apply_tracing(apply_cors(router, &allowed_origins))
}
