use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    routing::post,
    Json, Router,
};
use tracing::info;

use crate::documents::read_file_field;
use crate::models::{AppState, SpeechRequest, SpeechResponse, TranscriptionResponse};
use crate::routes::extract::LenientJson;
use crate::types::{AppError, AppResult};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/speech/stt", post(speech_to_text))
        .route("/api/speech/tts", post(text_to_speech))
        .with_state(state)
}

/// POST /api/speech/stt - optional multipart `file`
async fn speech_to_text(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<TranscriptionResponse>> {
    let upload = match multipart {
        Ok(mut multipart) => read_file_field(&mut multipart).await.ok(),
        Err(_) => None,
    };

    let (audio, filename) = match &upload {
        Some(file) => (&file.data[..], Some(file.filename.as_str())),
        None => (&[][..], None),
    };
    let text = state.services.stt.transcribe(audio, filename).await?;

    Ok(Json(TranscriptionResponse {
        message: "STT request received".to_string(),
        text,
    }))
}

/// POST /api/speech/tts - `{text, lang?, voice?}`
async fn text_to_speech(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<SpeechRequest>,
) -> AppResult<Json<SpeechResponse>> {
    let text = request
        .text
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::InvalidRequest("No text provided".to_string()))?;
    let lang = request.lang.unwrap_or_else(|| "en".to_string());
    let voice = request.voice.unwrap_or_else(|| "default".to_string());

    info!(lang = %lang, voice = %voice, chars = text.len(), "TTS request received");
    let audio_url = state.services.tts.synthesize(&text, &lang, &voice).await?;

    Ok(Json(SpeechResponse {
        message: "TTS request received".to_string(),
        audio_url,
    }))
}
