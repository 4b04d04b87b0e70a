use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fmt;

/// Value substituted when `HF_TOKEN` is unset. Treated as "not configured".
pub const PLACEHOLDER_TOKEN: &str = "YOUR_ACTUAL_HUGGINGFACE_TOKEN_HERE";

pub const DEFAULT_INFERENCE_BASE_URL: &str = "https://router.huggingface.co";
pub const DEFAULT_SUMMARIZATION_MODEL: &str = "facebook/bart-large-cnn";
pub const DEFAULT_GENERAL_MODEL: &str = "google/flan-t5-base";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub inference: InferenceConfig,
    pub uploads: UploadConfig,
    pub speech: SpeechConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Clone, Deserialize)]
pub struct InferenceConfig {
    pub api_token: String,
    pub base_url: String,
    pub summarization_model: String,
    pub general_model: String,
    pub timeout_secs: u64,
    pub max_concurrency: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechConfig {
    /// Local program used for text-to-speech (invoked as `<cmd> -v <voice> <text>`)
    pub tts_command: String,
}

impl InferenceConfig {
    /// A credential counts as configured only when it is non-empty and not the placeholder.
    pub fn is_configured(&self) -> bool {
        let token = self.api_token.trim();
        !token.is_empty() && token != PLACEHOLDER_TOKEN
    }

    /// Credential with everything but the last four characters hidden, for logs.
    pub fn masked_token(&self) -> String {
        if !self.is_configured() {
            return "<not configured>".to_string();
        }
        let visible: String = self
            .api_token
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("****{}", visible)
    }
}

impl fmt::Debug for InferenceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InferenceConfig")
            .field("api_token", &self.masked_token())
            .field("base_url", &self.base_url)
            .field("summarization_model", &self.summarization_model)
            .field("general_model", &self.general_model)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_concurrency", &self.max_concurrency)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: 5000,
                host: "0.0.0.0".to_string(),
                cors_allowed_origins: vec!["*".to_string()],
            },
            inference: InferenceConfig {
                api_token: PLACEHOLDER_TOKEN.to_string(),
                base_url: DEFAULT_INFERENCE_BASE_URL.to_string(),
                summarization_model: DEFAULT_SUMMARIZATION_MODEL.to_string(),
                general_model: DEFAULT_GENERAL_MODEL.to_string(),
                timeout_secs: 60,
                max_concurrency: 16,
            },
            uploads: UploadConfig {
                max_upload_bytes: 25 * 1024 * 1024,
            },
            speech: SpeechConfig {
                tts_command: "espeak-ng".to_string(),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        Ok(Self {
            server: ServerConfig {
                port: parse_var("PORT", defaults.server.port)?,
                host: env::var("HOST").unwrap_or(defaults.server.host),
                cors_allowed_origins: env::var("ALLOWED_ORIGINS")
                    .map(|origins| {
                        origins
                            .split(',')
                            .map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty())
                            .collect()
                    })
                    .unwrap_or(defaults.server.cors_allowed_origins),
            },
            inference: InferenceConfig {
                api_token: env::var("HF_TOKEN")
                    .ok()
                    .filter(|token| !token.trim().is_empty())
                    .unwrap_or(defaults.inference.api_token),
                base_url: env::var("INFERENCE_BASE_URL").unwrap_or(defaults.inference.base_url),
                summarization_model: env::var("SUMMARIZATION_MODEL")
                    .unwrap_or(defaults.inference.summarization_model),
                general_model: env::var("GENERAL_MODEL").unwrap_or(defaults.inference.general_model),
                timeout_secs: parse_var("INFERENCE_TIMEOUT_SECS", defaults.inference.timeout_secs)?,
                max_concurrency: parse_var(
                    "INFERENCE_MAX_CONCURRENCY",
                    defaults.inference.max_concurrency,
                )?,
            },
            uploads: UploadConfig {
                max_upload_bytes: parse_var("MAX_UPLOAD_BYTES", defaults.uploads.max_upload_bytes)?,
            },
            speech: SpeechConfig {
                tts_command: env::var("TTS_COMMAND").unwrap_or(defaults.speech.tts_command),
            },
        })
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid value, got {:?}", name, raw)),
        Err(_) => Ok(default),
    }
}
