use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::{error, info};

use crate::llm::GenerationRequest;
use crate::models::{AppState, ErrorDetail, ProcessErrorResponse, ProcessResponse};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/process", post(process))
        .with_state(state)
}

/// POST /process - run one generation task.
///
/// The body is parsed leniently, so a missing or non-JSON body behaves like
/// `{"text": "", "task": "chat"}`.
pub async fn process(State(state): State<AppState>, body: Bytes) -> Response {
    let request = GenerationRequest::from_body(&body);
    info!(task = %request.task, text_len = request.text.len(), "Received process request");

    match state.dispatcher.dispatch(&request).await {
        Ok(generation) => Json(ProcessResponse {
            output: generation.output,
        })
        .into_response(),
        Err(e) => {
            error!("Error processing request: {}", e);
            let status = StatusCode::from_u16(e.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let body = ProcessErrorResponse {
                output: format!("Error: {}", e),
                error: ErrorDetail {
                    kind: e.kind().to_string(),
                    message: e.to_string(),
                    upstream_status: e.upstream_status(),
                },
            };
            (status, Json(body)).into_response()
        }
    }
}
