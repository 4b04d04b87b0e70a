// Assistant Gateway - HTTP gateway for the browser assistant's text, document and speech tools

pub mod config;
pub mod documents; // Upload intake and PDF text extraction
pub mod llm;       // Task catalog, inference client, dispatcher
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;  // OCR / speech / translation / video / RAG engines
pub mod types;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
