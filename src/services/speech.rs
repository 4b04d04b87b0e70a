// Local text-to-speech
// Runs a speech synthesis program (espeak-ng by default) that plays the text
// on the host. No audio artifact is kept; the returned reference is fixed.

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use super::{ServiceError, ServiceResult, TextToSpeech};

/// Audio reference returned for every synthesis.
pub const SYNTHESIZED_AUDIO_REF: &str = "dummy_audio_url_pyttsx3.mp3";

pub struct CommandSynthesizer {
    program: String,
}

impl CommandSynthesizer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// `voice` wins over `lang` unless it is `default`.
    fn voice_arg<'a>(lang: &'a str, voice: &'a str) -> &'a str {
        if voice.is_empty() || voice == "default" {
            lang
        } else {
            voice
        }
    }
}

#[async_trait]
impl TextToSpeech for CommandSynthesizer {
    async fn synthesize(&self, text: &str, lang: &str, voice: &str) -> ServiceResult<String> {
        let voice = Self::voice_arg(lang, voice);
        debug!(program = %self.program, voice = %voice, chars = text.len(), "Running speech synthesis");

        let output = Command::new(&self.program)
            .arg("-v")
            .arg(voice)
            .arg("--")
            .arg(text)
            .output()
            .await
            .map_err(|e| ServiceError::Synthesis(format!("{}: {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ServiceError::Synthesis(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        info!(voice = %voice, "Speech synthesis finished");
        Ok(SYNTHESIZED_AUDIO_REF.to_string())
    }
}

/// Synthesizer that does nothing; used when no audio device is wanted.
pub struct SilentSynthesizer;

#[async_trait]
impl TextToSpeech for SilentSynthesizer {
    async fn synthesize(&self, _text: &str, _lang: &str, _voice: &str) -> ServiceResult<String> {
        Ok(SYNTHESIZED_AUDIO_REF.to_string())
    }
}
