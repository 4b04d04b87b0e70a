//! Capability services behind the HTTP routes
//!
//! Every route family talks to its engine through a trait object held in
//! `AppState`. Most engines here are placeholders returning fixed payloads;
//! a real engine replaces one by implementing the same trait, with no change
//! to routing.
//!
//! | trait | engine |
//! |---|---|
//! | `OcrEngine` | placeholder text |
//! | `SpeechToText` | placeholder text |
//! | `TextToSpeech` | local synthesis program (`speech::CommandSynthesizer`) |
//! | `Translator` | placeholder translation + language detection |
//! | `VideoTranscripts` | placeholder YouTube transcript/ASR/summary/QA |
//! | `Retriever` | placeholder RAG embed/upsert/query/answer |

pub mod placeholder;
pub mod speech;

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::Config;

pub use placeholder::*;
pub use speech::*;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Failed to run speech synthesis: {0}")]
    Synthesis(String),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OcrBlock {
    pub text: String,
    pub bbox: [f32; 4],
    pub confidence: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OcrOutput {
    pub text: String,
    pub blocks: Vec<OcrBlock>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OcrSource {
    Image,
    Screenshot,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranscriptSegment {
    pub start: f64,
    pub dur: f64,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transcript {
    pub segments: Vec<TranscriptSegment>,
    pub lang: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RetrievedChunk {
    pub text: String,
}

#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn recognize(&self, image: &Path, source: OcrSource) -> ServiceResult<OcrOutput>;
}

#[async_trait]
pub trait SpeechToText: Send + Sync {
    async fn transcribe(&self, audio: &[u8], filename: Option<&str>) -> ServiceResult<String>;
}

#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Speak `text` and return a reference to the produced audio.
    async fn synthesize(&self, text: &str, lang: &str, voice: &str) -> ServiceResult<String>;
}

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source: Option<&str>,
        target: Option<&str>,
    ) -> ServiceResult<String>;

    async fn detect_language(&self, text: &str) -> ServiceResult<String>;
}

#[async_trait]
pub trait VideoTranscripts: Send + Sync {
    async fn transcript(&self, video_id: Option<&str>) -> ServiceResult<Transcript>;
    async fn asr(&self, video_id: Option<&str>) -> ServiceResult<Transcript>;
    async fn summarize(&self, video_id: Option<&str>) -> ServiceResult<String>;
    async fn answer(&self, video_id: Option<&str>, question: Option<&str>) -> ServiceResult<String>;
}

#[async_trait]
pub trait Retriever: Send + Sync {
    async fn embed(&self, texts: &[String]) -> ServiceResult<Vec<Vec<f32>>>;
    async fn upsert(&self, docs: &[serde_json::Value]) -> ServiceResult<String>;
    async fn query(&self, query: &str) -> ServiceResult<Vec<RetrievedChunk>>;
    async fn answer(&self, question: &str) -> ServiceResult<String>;
}

/// The full set of engines a router is built with.
#[derive(Clone)]
pub struct Services {
    pub ocr: Arc<dyn OcrEngine>,
    pub stt: Arc<dyn SpeechToText>,
    pub tts: Arc<dyn TextToSpeech>,
    pub translator: Arc<dyn Translator>,
    pub videos: Arc<dyn VideoTranscripts>,
    pub retriever: Arc<dyn Retriever>,
}

impl Services {
    /// Placeholder engines plus the configured local speech synthesizer.
    pub fn from_config(config: &Config) -> Self {
        Self {
            tts: Arc::new(CommandSynthesizer::new(&config.speech.tts_command)),
            ..Self::placeholders()
        }
    }

    /// Placeholder engines only; speech synthesis is a no-op.
    pub fn placeholders() -> Self {
        Self {
            ocr: Arc::new(PlaceholderOcr),
            stt: Arc::new(PlaceholderSpeechToText),
            tts: Arc::new(SilentSynthesizer),
            translator: Arc::new(PlaceholderTranslator),
            videos: Arc::new(PlaceholderVideoTranscripts),
            retriever: Arc::new(PlaceholderRetriever),
        }
    }
}
