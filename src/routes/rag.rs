use axum::{extract::State, routing::post, Json, Router};

use crate::models::{
    AnswerResponse, AppState, EmbedRequest, EmbedResponse, QueryRequest, QueryResponse,
    QuestionRequest, StatusResponse, UpsertRequest,
};
use crate::routes::extract::LenientJson;
use crate::types::AppResult;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/rag/embed", post(embed))
        .route("/api/rag/upsert", post(upsert))
        .route("/api/rag/query", post(query))
        .route("/api/rag/answer", post(answer))
        .with_state(state)
}

async fn embed(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<EmbedRequest>,
) -> AppResult<Json<EmbedResponse>> {
    let embeddings = state.services.retriever.embed(&request.texts).await?;
    Ok(Json(EmbedResponse {
        message: "Embed request received".to_string(),
        embeddings,
    }))
}

async fn upsert(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<UpsertRequest>,
) -> AppResult<Json<StatusResponse>> {
    let status = state.services.retriever.upsert(&request.docs).await?;
    Ok(Json(StatusResponse {
        message: "Upsert request received".to_string(),
        status,
    }))
}

async fn query(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<QueryRequest>,
) -> AppResult<Json<QueryResponse>> {
    let results = state
        .services
        .retriever
        .query(request.query.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(QueryResponse {
        message: "Query request received".to_string(),
        results,
    }))
}

async fn answer(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<QuestionRequest>,
) -> AppResult<Json<AnswerResponse>> {
    let answer = state
        .services
        .retriever
        .answer(request.question.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(AnswerResponse {
        message: "Answer request received".to_string(),
        answer,
    }))
}
