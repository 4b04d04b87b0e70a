// Placeholder engines returning fixed payloads

use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use super::{
    OcrEngine, OcrOutput, OcrSource, RetrievedChunk, Retriever, ServiceResult, SpeechToText,
    Transcript, TranscriptSegment, Translator, VideoTranscripts,
};

pub struct PlaceholderOcr;

#[async_trait]
impl OcrEngine for PlaceholderOcr {
    async fn recognize(&self, image: &Path, source: OcrSource) -> ServiceResult<OcrOutput> {
        debug!(path = %image.display(), "Placeholder OCR");
        let subject = match source {
            OcrSource::Image => "image",
            OcrSource::Screenshot => "screenshot",
        };
        Ok(OcrOutput {
            text: format!(
                "This is sample text extracted from the {subject} using OCR. In a complete implementation, this would contain the actual text content of the {subject}."
            ),
            blocks: Vec::new(),
        })
    }
}

pub struct PlaceholderSpeechToText;

#[async_trait]
impl SpeechToText for PlaceholderSpeechToText {
    async fn transcribe(&self, audio: &[u8], filename: Option<&str>) -> ServiceResult<String> {
        debug!(bytes = audio.len(), filename = ?filename, "Placeholder STT");
        Ok("Dummy speech to text output.".to_string())
    }
}

pub struct PlaceholderTranslator;

#[async_trait]
impl Translator for PlaceholderTranslator {
    async fn translate(
        &self,
        _text: &str,
        source: Option<&str>,
        target: Option<&str>,
    ) -> ServiceResult<String> {
        // Missing languages are echoed as `None`, matching existing clients.
        Ok(format!(
            "Dummy translated text from {} to {}.",
            source.unwrap_or("None"),
            target.unwrap_or("None")
        ))
    }

    async fn detect_language(&self, _text: &str) -> ServiceResult<String> {
        Ok("en".to_string())
    }
}

pub struct PlaceholderVideoTranscripts;

fn single_segment(text: &str) -> Transcript {
    Transcript {
        segments: vec![TranscriptSegment {
            start: 0.0,
            dur: 5.0,
            text: text.to_string(),
        }],
        lang: "en".to_string(),
    }
}

#[async_trait]
impl VideoTranscripts for PlaceholderVideoTranscripts {
    async fn transcript(&self, video_id: Option<&str>) -> ServiceResult<Transcript> {
        debug!(video_id = ?video_id, "Placeholder transcript fetch");
        Ok(single_segment("dummy transcript"))
    }

    async fn asr(&self, video_id: Option<&str>) -> ServiceResult<Transcript> {
        debug!(video_id = ?video_id, "Placeholder ASR");
        Ok(single_segment("dummy ASR transcript"))
    }

    async fn summarize(&self, _video_id: Option<&str>) -> ServiceResult<String> {
        Ok("Dummy YouTube summary.".to_string())
    }

    async fn answer(&self, _video_id: Option<&str>, _question: Option<&str>) -> ServiceResult<String> {
        Ok("Dummy YouTube Q&A answer.".to_string())
    }
}

pub struct PlaceholderRetriever;

#[async_trait]
impl Retriever for PlaceholderRetriever {
    async fn embed(&self, texts: &[String]) -> ServiceResult<Vec<Vec<f32>>> {
        debug!(count = texts.len(), "Placeholder embed");
        Ok(vec![vec![0.1, 0.2]])
    }

    async fn upsert(&self, docs: &[serde_json::Value]) -> ServiceResult<String> {
        debug!(count = docs.len(), "Placeholder upsert");
        Ok("success".to_string())
    }

    async fn query(&self, _query: &str) -> ServiceResult<Vec<RetrievedChunk>> {
        Ok(vec![RetrievedChunk {
            text: "dummy result".to_string(),
        }])
    }

    async fn answer(&self, _question: &str) -> ServiceResult<String> {
        Ok("This is a dummy RAG answer.".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ocr_mentions_source() {
        let out = PlaceholderOcr
            .recognize(Path::new("/tmp/x.png"), OcrSource::Screenshot)
            .await
            .unwrap();
        assert!(out.text.contains("screenshot"));
        assert!(out.blocks.is_empty());
    }

    #[tokio::test]
    async fn test_translator_names_languages() {
        let text = PlaceholderTranslator
            .translate("hola", Some("es"), Some("en"))
            .await
            .unwrap();
        assert_eq!(text, "Dummy translated text from es to en.");
    }

    #[tokio::test]
    async fn test_translator_echoes_missing_languages() {
        let text = PlaceholderTranslator.translate("hola", None, None).await.unwrap();
        assert_eq!(text, "Dummy translated text from None to None.");
    }

    #[tokio::test]
    async fn test_transcripts_are_single_segment() {
        let transcript = PlaceholderVideoTranscripts.asr(Some("abc")).await.unwrap();
        assert_eq!(transcript.lang, "en");
        assert_eq!(transcript.segments.len(), 1);
        assert_eq!(transcript.segments[0].text, "dummy ASR transcript");
    }
}
