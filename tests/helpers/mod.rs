#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use assistant_gateway::config::Config;
use assistant_gateway::llm::{
    Dispatcher, InferenceClient, InferenceTransport, TaskCatalog, TransportError,
    TransportResponse,
};
use assistant_gateway::services::{ServiceResult, Services, TextToSpeech};
use assistant_gateway::{create_router, AppState};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

pub const BOUNDARY: &str = "gateway-test-boundary";

/// How the stub inference provider answers.
pub enum Reply {
    /// `[{"generated_text": <prompt it received>}]`
    EchoPrompt,
    Fixed(u16, String),
}

/// Inference transport that records every call and answers per `Reply`.
pub struct StubProvider {
    reply: Reply,
    calls: Mutex<Vec<(String, Value)>>,
}

impl StubProvider {
    pub fn echo() -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::EchoPrompt,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn fixed(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Fixed(status, body.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceTransport for StubProvider {
    async fn post_json(
        &self,
        url: &str,
        _bearer_token: &str,
        body: &Value,
    ) -> Result<TransportResponse, TransportError> {
        self.calls.lock().unwrap().push((url.to_string(), body.clone()));
        Ok(match &self.reply {
            Reply::EchoPrompt => TransportResponse {
                status: 200,
                body: serde_json::json!([{ "generated_text": body["inputs"] }]).to_string(),
            },
            Reply::Fixed(status, text) => TransportResponse {
                status: *status,
                body: text.clone(),
            },
        })
    }
}

/// Text-to-speech engine that remembers what it was asked to say.
#[derive(Default)]
pub struct RecordingSynthesizer {
    pub spoken: Mutex<Vec<(String, String, String)>>,
}

#[async_trait]
impl TextToSpeech for RecordingSynthesizer {
    async fn synthesize(&self, text: &str, lang: &str, voice: &str) -> ServiceResult<String> {
        self.spoken
            .lock()
            .unwrap()
            .push((text.to_string(), lang.to_string(), voice.to_string()));
        Ok("recorded.mp3".to_string())
    }
}

pub fn state_with(provider: Arc<StubProvider>, token: &str, services: Services) -> AppState {
    let mut config = Config::default();
    config.inference.api_token = token.to_string();
    let client = InferenceClient::new(&config.inference, provider);
    let dispatcher = Dispatcher::new(TaskCatalog::from_config(&config.inference), client);
    AppState::new(config, dispatcher, services)
}

/// Router with a configured credential, the given provider and placeholder engines.
pub fn app_with(provider: Arc<StubProvider>) -> Router {
    create_router(state_with(provider, "hf_test_token", Services::placeholders()))
}

pub fn app() -> Router {
    app_with(StubProvider::echo())
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// One multipart part: (field name, optional filename, content).
pub type Part<'a> = (&'a str, Option<&'a str>, &'a [u8]);

pub fn post_multipart(uri: &str, parts: &[Part<'_>]) -> Request<Body> {
    let mut body = Vec::new();
    for (name, filename, data) in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match filename {
            Some(filename) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                    name, filename
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
            ),
        }
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}
