use axum::{extract::State, routing::post, Json, Router};
use tracing::info;

use crate::models::{AnswerResponse, AppState, SummaryResponse, TranscriptResponse, VideoRequest};
use crate::routes::extract::LenientJson;
use crate::types::AppResult;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/youtube/transcript", post(get_transcript))
        .route("/api/youtube/asr", post(perform_asr))
        .route("/api/youtube/summarize", post(summarize_video))
        .route("/api/youtube/qa", post(answer_question))
        .with_state(state)
}

async fn get_transcript(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<VideoRequest>,
) -> AppResult<Json<TranscriptResponse>> {
    info!(video_id = ?request.video_id, "Transcript requested");
    let transcript = state.services.videos.transcript(request.video_id.as_deref()).await?;

    Ok(Json(TranscriptResponse {
        message: "YouTube transcript request received".to_string(),
        transcript: transcript.segments,
        lang: transcript.lang,
    }))
}

async fn perform_asr(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<VideoRequest>,
) -> AppResult<Json<TranscriptResponse>> {
    info!(video_id = ?request.video_id, "ASR requested");
    let transcript = state.services.videos.asr(request.video_id.as_deref()).await?;

    Ok(Json(TranscriptResponse {
        message: "YouTube ASR request received".to_string(),
        transcript: transcript.segments,
        lang: transcript.lang,
    }))
}

async fn summarize_video(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<VideoRequest>,
) -> AppResult<Json<SummaryResponse>> {
    let summary = state.services.videos.summarize(request.video_id.as_deref()).await?;

    Ok(Json(SummaryResponse {
        message: "YouTube summarize request received".to_string(),
        summary,
    }))
}

async fn answer_question(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<VideoRequest>,
) -> AppResult<Json<AnswerResponse>> {
    let answer = state
        .services
        .videos
        .answer(request.video_id.as_deref(), request.question.as_deref())
        .await?;

    Ok(Json(AnswerResponse {
        message: "YouTube Q&A request received".to_string(),
        answer,
    }))
}
