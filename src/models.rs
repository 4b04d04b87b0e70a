use std::sync::Arc;

use crate::config::Config;
use crate::llm::{Dispatcher, InferenceClient, TaskCatalog};
use crate::services::{OcrBlock, RetrievedChunk, Services, TranscriptSegment};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub dispatcher: Arc<Dispatcher>,
    pub services: Services,
}

impl AppState {
    pub fn new(config: Config, dispatcher: Dispatcher, services: Services) -> Self {
        Self {
            config,
            dispatcher: Arc::new(dispatcher),
            services,
        }
    }

    /// Production wiring: reqwest inference client and configured engines.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let client = InferenceClient::from_config(&config.inference)?;
        let dispatcher = Dispatcher::new(TaskCatalog::from_config(&config.inference), client);
        let services = Services::from_config(&config);
        Ok(Self::new(config, dispatcher, services))
    }
}

// API Request/Response types

#[derive(Debug, serde::Serialize)]
pub struct StatusResponse {
    pub message: String,
    pub status: String,
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// `/process` success body
#[derive(Debug, serde::Serialize)]
pub struct ProcessResponse {
    pub output: String,
}

/// `/process` failure body. `output` keeps the legacy human-readable
/// message; `error` is what callers should branch on.
#[derive(Debug, serde::Serialize)]
pub struct ProcessErrorResponse {
    pub output: String,
    pub error: ErrorDetail,
}

#[derive(Debug, serde::Serialize)]
pub struct ErrorDetail {
    pub kind: String,
    pub message: String,
    pub upstream_status: Option<u16>,
}

#[derive(Debug, serde::Serialize)]
pub struct TokenResponse {
    pub message: String,
    pub token: String,
}

#[derive(Debug, serde::Serialize)]
pub struct CapabilitiesResponse {
    pub message: String,
    pub capabilities: Vec<String>,
}

// LLM family

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct ChatRequest {
    pub messages: Option<Vec<ChatMessage>>,
    pub text: Option<String>,
    pub model: Option<String>,
    pub stream: Option<bool>,
}

impl ChatRequest {
    /// Content of the last user message, falling back to `text`.
    pub fn prompt_text(&self) -> String {
        self.messages
            .as_deref()
            .unwrap_or_default()
            .iter()
            .rev()
            .find(|m| m.role == "user")
            .map(|m| m.content.clone())
            .or_else(|| self.text.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, serde::Serialize)]
pub struct ChatResponse {
    pub message: String,
    pub response: String,
    pub model: String,
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct TextRequest {
    pub text: Option<String>,
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct CodeRequest {
    pub code: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct SummaryResponse {
    pub message: String,
    pub summary: String,
}

#[derive(Debug, serde::Serialize)]
pub struct LanguageResponse {
    pub message: String,
    pub language: String,
}

#[derive(Debug, serde::Serialize)]
pub struct ExplanationResponse {
    pub message: String,
    pub explanation: String,
}

#[derive(Debug, serde::Serialize)]
pub struct PointsResponse {
    pub message: String,
    pub points: String,
}

#[derive(Debug, serde::Serialize)]
pub struct ImprovedTextResponse {
    pub message: String,
    pub improved_text: String,
}

// OCR / PDF

#[derive(Debug, Default, serde::Deserialize)]
pub struct ScreenshotRequest {
    pub image_base64: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct OcrResponse {
    pub message: String,
    pub text: String,
    pub blocks: Vec<OcrBlock>,
}

#[derive(Debug, serde::Serialize)]
pub struct PdfExtractResponse {
    pub message: String,
    pub pages: Vec<crate::documents::PdfPage>,
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct PdfQuestionRequest {
    pub question: Option<String>,
    #[serde(default)]
    pub context: String,
}

#[derive(Debug, serde::Serialize)]
pub struct AnswerResponse {
    pub message: String,
    pub answer: String,
}

// RAG

#[derive(Debug, Default, serde::Deserialize)]
pub struct EmbedRequest {
    #[serde(default)]
    pub texts: Vec<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct EmbedResponse {
    pub message: String,
    pub embeddings: Vec<Vec<f32>>,
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct UpsertRequest {
    #[serde(default)]
    pub docs: Vec<serde_json::Value>,
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct QueryRequest {
    pub query: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct QueryResponse {
    pub message: String,
    pub results: Vec<RetrievedChunk>,
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct QuestionRequest {
    pub question: Option<String>,
}

// Speech / translation

#[derive(Debug, serde::Serialize)]
pub struct TranscriptionResponse {
    pub message: String,
    pub text: String,
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct SpeechRequest {
    pub text: Option<String>,
    pub lang: Option<String>,
    pub voice: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct SpeechResponse {
    pub message: String,
    pub audio_url: String,
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct TranslateRequest {
    pub text: Option<String>,
    pub source: Option<String>,
    pub target: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct TranslateResponse {
    pub message: String,
    pub translated_text: String,
}

// YouTube

#[derive(Debug, Default, serde::Deserialize)]
pub struct VideoRequest {
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
    pub question: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct TranscriptResponse {
    pub message: String,
    pub transcript: Vec<TranscriptSegment>,
    pub lang: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_prompt_uses_last_user_message() {
        let request: ChatRequest = serde_json::from_value(serde_json::json!({
            "messages": [
                {"role": "user", "content": "first"},
                {"role": "assistant", "content": "reply"},
                {"role": "user", "content": "second"},
                {"role": "assistant", "content": "reply 2"}
            ],
            "text": "ignored"
        }))
        .unwrap();
        assert_eq!(request.prompt_text(), "second");
    }

    #[test]
    fn test_chat_prompt_falls_back_to_text() {
        let request: ChatRequest =
            serde_json::from_value(serde_json::json!({ "text": "hello" })).unwrap();
        assert_eq!(request.prompt_text(), "hello");
        assert_eq!(ChatRequest::default().prompt_text(), "");
    }

    #[test]
    fn test_video_request_reads_camel_case_id() {
        let request: VideoRequest =
            serde_json::from_value(serde_json::json!({ "videoId": "dQw4w9WgXcQ" })).unwrap();
        assert_eq!(request.video_id.as_deref(), Some("dQw4w9WgXcQ"));
    }
}
