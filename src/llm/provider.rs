use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Status and raw body of a completed outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Faults raised before a response status is available.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Request to inference provider timed out: {0}")]
    Timeout(String),

    #[error("Could not reach inference provider: {0}")]
    Connection(String),

    #[error("Failed to build HTTP client: {0}")]
    Setup(String),
}

/// Outbound seam of the inference client; tests substitute recording stubs.
#[async_trait]
pub trait InferenceTransport: Send + Sync {
    async fn post_json(
        &self,
        url: &str,
        bearer_token: &str,
        body: &serde_json::Value,
    ) -> Result<TransportResponse, TransportError>;
}

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Setup(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl InferenceTransport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &str,
        bearer_token: &str,
        body: &serde_json::Value,
    ) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", bearer_token))
            .json(body)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify)?;

        Ok(TransportResponse { status, body })
    }
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(err.to_string())
    } else {
        TransportError::Connection(err.to_string())
    }
}
