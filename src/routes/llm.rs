//! `/api/llm/*` endpoints
//!
//! Each endpoint maps onto a catalog task and runs through the same
//! dispatcher as `/process`; only the request field names and response keys
//! differ. Language detection has no catalog task and goes to the translator.

use axum::{extract::State, routing::post, Json, Router};
use tracing::{debug, info};

use crate::llm::{Generation, GenerationRequest};
use crate::models::{
    AppState, ChatRequest, ChatResponse, CodeRequest, ExplanationResponse, ImprovedTextResponse,
    LanguageResponse, PointsResponse, SummaryResponse, TextRequest,
};
use crate::routes::extract::LenientJson;
use crate::types::AppResult;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/llm/chat", post(chat))
        .route("/api/llm/summarize", post(summarize))
        .route("/api/llm/detect-language", post(detect_language))
        .route("/api/llm/explain-code", post(explain_code))
        .route("/api/llm/extract-points", post(extract_points))
        .route("/api/llm/improve-text", post(improve_text))
        .with_state(state)
}

async fn run_task(state: &AppState, task: &str, text: String) -> AppResult<Generation> {
    let request = GenerationRequest::new(task, text);
    Ok(state.dispatcher.dispatch(&request).await?)
}

async fn chat(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    let requested_model = request.model.clone().unwrap_or_else(|| "default".to_string());
    if request.stream == Some(true) {
        debug!("Streaming requested; returning a complete response");
    }
    info!(model = %requested_model, "Chat request received");

    let generation = run_task(&state, "chat", request.prompt_text()).await?;

    Ok(Json(ChatResponse {
        message: format!("Chat with {} received", requested_model),
        response: generation.output,
        model: generation.model_id,
    }))
}

async fn summarize(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<TextRequest>,
) -> AppResult<Json<SummaryResponse>> {
    let generation = run_task(&state, "summarize", request.text.unwrap_or_default()).await?;

    Ok(Json(SummaryResponse {
        message: "Summarize request received".to_string(),
        summary: generation.output,
    }))
}

async fn detect_language(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<TextRequest>,
) -> AppResult<Json<LanguageResponse>> {
    let text = request.text.unwrap_or_default();
    let language = state.services.translator.detect_language(&text).await?;

    Ok(Json(LanguageResponse {
        message: "Language detection request received".to_string(),
        language,
    }))
}

async fn explain_code(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<CodeRequest>,
) -> AppResult<Json<ExplanationResponse>> {
    let code = request.code.or(request.text).unwrap_or_default();
    let generation = run_task(&state, "explain_code", code).await?;

    Ok(Json(ExplanationResponse {
        message: "Code explanation request received".to_string(),
        explanation: generation.output,
    }))
}

async fn extract_points(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<TextRequest>,
) -> AppResult<Json<PointsResponse>> {
    let generation = run_task(&state, "extract_points", request.text.unwrap_or_default()).await?;

    Ok(Json(PointsResponse {
        message: "Key point extraction request received".to_string(),
        points: generation.output,
    }))
}

async fn improve_text(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<TextRequest>,
) -> AppResult<Json<ImprovedTextResponse>> {
    let generation = run_task(&state, "improve_text", request.text.unwrap_or_default()).await?;

    Ok(Json(ImprovedTextResponse {
        message: "Text improvement request received".to_string(),
        improved_text: generation.output,
    }))
}
