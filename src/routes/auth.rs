// Authentication stubs: static token and capability list

use axum::{
    routing::{get, post},
    Json, Router,
};
use crate::models::{CapabilitiesResponse, TokenResponse};

pub fn router() -> Router {
    Router::new()
        .route("/api/auth/token", post(exchange_token))
        .route("/api/auth/me", get(get_me))
}

async fn exchange_token() -> Json<TokenResponse> {
    Json(TokenResponse {
        message: "Token exchange endpoint".to_string(),
        token: "dummy_jwt".to_string(),
    })
}

async fn get_me() -> Json<CapabilitiesResponse> {
    Json(CapabilitiesResponse {
        message: "User capabilities endpoint".to_string(),
        capabilities: vec!["summarize".to_string(), "chat".to_string()],
    })
}
