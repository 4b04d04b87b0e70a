// Hugging Face inference client
// Endpoint: POST {base_url}/models/{model_id} with body {"inputs": prompt}

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::Semaphore;
use tracing::{debug, error, warn};

use crate::config::InferenceConfig;
use crate::llm::provider::{InferenceTransport, ReqwestTransport, TransportError};

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("Hugging Face token not configured. Please set the HF_TOKEN environment variable")]
    NotConfigured,

    #[error("Hugging Face API returned status {status}. Response: {body}")]
    Remote { status: u16, body: String },

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl InferenceError {
    /// Status the gateway answers with. Every inference failure is a 500;
    /// the upstream status travels in the message instead.
    pub fn http_status(&self) -> u16 {
        500
    }

    pub fn kind(&self) -> &'static str {
        match self {
            InferenceError::NotConfigured => "configuration",
            InferenceError::Remote { .. } => "upstream",
            InferenceError::Transport(_) => "transport",
        }
    }

    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            InferenceError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub struct InferenceClient {
    transport: Arc<dyn InferenceTransport>,
    base_url: String,
    api_token: String,
    configured: bool,
    permits: Semaphore,
}

impl InferenceClient {
    pub fn new(config: &InferenceConfig, transport: Arc<dyn InferenceTransport>) -> Self {
        Self {
            transport,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
            configured: config.is_configured(),
            permits: Semaphore::new(config.max_concurrency.max(1)),
        }
    }

    /// Client backed by reqwest with the configured timeout.
    pub fn from_config(config: &InferenceConfig) -> Result<Self, TransportError> {
        let transport = ReqwestTransport::new(Duration::from_secs(config.timeout_secs))?;
        Ok(Self::new(config, Arc::new(transport)))
    }

    pub fn model_url(&self, model_id: &str) -> String {
        format!("{}/models/{}", self.base_url, model_id)
    }

    /// Run one generation. No retries; the credential is checked before any
    /// outbound call is attempted.
    pub async fn generate(&self, model_id: &str, prompt: &str) -> Result<String, InferenceError> {
        if !self.configured {
            warn!("Inference requested but HF_TOKEN is not configured");
            return Err(InferenceError::NotConfigured);
        }

        // Semaphore is never closed, so acquire cannot fail here.
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|e| TransportError::Connection(e.to_string()))?;

        let url = self.model_url(model_id);
        debug!(model = %model_id, prompt_len = prompt.len(), "Calling inference provider");

        let response = self
            .transport
            .post_json(&url, &self.api_token, &serde_json::json!({ "inputs": prompt }))
            .await
            .map_err(|e| {
                error!(model = %model_id, "Inference transport failure: {}", e);
                e
            })?;

        if !response.is_success() {
            error!(
                model = %model_id,
                status = response.status,
                "Inference provider returned an error: {}",
                response.body
            );
            return Err(InferenceError::Remote {
                status: response.status,
                body: response.body,
            });
        }

        Ok(extract_generated_text(&response.body))
    }
}

/// Pull the generated text out of a provider response body.
///
/// A list whose first element carries `generated_text` (or `summary_text`,
/// which summarization pipelines return) yields that string. Any other JSON
/// value is returned in its compact string form, and a body that is not JSON
/// at all is returned verbatim.
pub fn extract_generated_text(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => first_generated_text(&value).unwrap_or_else(|| value.to_string()),
        Err(_) => body.to_string(),
    }
}

fn first_generated_text(value: &Value) -> Option<String> {
    let first = value.as_array()?.first()?;
    first
        .get("generated_text")
        .or_else(|| first.get("summary_text"))
        .and_then(Value::as_str)
        .map(str::to_string)
}
