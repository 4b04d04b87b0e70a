use axum::{routing::get, Json, Router};
use crate::models::{HealthResponse, StatusResponse};

pub fn router() -> Router {
    Router::new()
        .route("/", get(home))
        .route("/api/health", get(health_check))
}

async fn home() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "AI Assistant Server is running!".to_string(),
        status: "ok".to_string(),
    })
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Server is running!".to_string(),
    })
}
