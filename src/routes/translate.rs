use axum::{extract::State, routing::post, Json, Router};

use crate::models::{AppState, TranslateRequest, TranslateResponse};
use crate::routes::extract::LenientJson;
use crate::types::AppResult;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/translate/translate", post(translate_text))
        .with_state(state)
}

async fn translate_text(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<TranslateRequest>,
) -> AppResult<Json<TranslateResponse>> {
    let translated_text = state
        .services
        .translator
        .translate(
            request.text.as_deref().unwrap_or_default(),
            request.source.as_deref(),
            request.target.as_deref(),
        )
        .await?;

    Ok(Json(TranslateResponse {
        message: "Translate request received".to_string(),
        translated_text,
    }))
}
