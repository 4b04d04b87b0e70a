//! Liveness, auth, upload and collaborator endpoint tests

mod helpers;

use std::sync::Arc;

use assistant_gateway::create_router;
use assistant_gateway::documents::pdf::fixtures::single_page_pdf;
use assistant_gateway::services::Services;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use helpers::*;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_liveness_endpoints() {
    let (status, body) = send(app(), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "AI Assistant Server is running!", "status": "ok" }));

    let (status, body) = send(app(), get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "message": "Server is running!" }));
}

#[tokio::test]
async fn test_auth_stubs() {
    let (status, body) = send(app(), post_empty("/api/auth/token")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token"], "dummy_jwt");

    let (status, body) = send(app(), get("/api/auth/me")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["capabilities"], json!(["summarize", "chat"]));
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/llm/summarize")
        .header(header::ORIGIN, "chrome-extension://abcdef")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_pdf_extract_rejects_wrong_extension() {
    let request = post_multipart("/api/pdf/extract", &[("file", Some("notes.txt"), b"hello")]);
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "File must be a PDF");
}

#[tokio::test]
async fn test_pdf_extract_requires_a_file() {
    let request = post_multipart("/api/pdf/extract", &[("comment", None, b"no file here")]);
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No file provided");

    let request = post_multipart("/api/pdf/extract", &[]);
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No file provided");

    let (status, body) = send(app(), post_empty("/api/pdf/extract")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No file provided");
}

#[tokio::test]
async fn test_upload_with_empty_filename_is_rejected() {
    for uri in ["/api/pdf/extract", "/api/ocr/image"] {
        let request = post_multipart(uri, &[("file", Some(""), b"data")]);
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["error"], "No file selected", "{}", uri);
    }
}

#[tokio::test]
async fn test_file_part_without_filename_counts_as_missing() {
    let request = post_multipart("/api/pdf/extract", &[("file", None, b"plain form value")]);
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No file provided");
}

#[tokio::test]
async fn test_pdf_extract_returns_single_page() {
    let pdf = single_page_pdf("Invoice total 42").unwrap();
    let request = post_multipart("/api/pdf/extract", &[("file", Some("invoice.pdf"), pdf.as_slice())]);
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "PDF processed successfully");
    let pages = body["pages"].as_array().unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0]["page"], 1);
    assert!(pages[0]["text"].as_str().unwrap().contains("Invoice total 42"));
    assert_eq!(pages[0]["tables"], json!([]));
}

#[tokio::test]
async fn test_pdf_extract_reports_unreadable_pdf() {
    let request = post_multipart(
        "/api/pdf/extract",
        &[("file", Some("broken.pdf"), b"this is not a pdf")],
    );
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().starts_with("Failed to process PDF"));
}

#[tokio::test]
async fn test_pdf_answer_echoes_question() {
    let (status, body) = send(
        app(),
        post_json("/api/pdf/answer", json!({ "question": "What is the total?" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["answer"].as_str().unwrap().contains("'What is the total?'"));
}

#[tokio::test]
async fn test_ocr_image_accepts_allowed_extension() {
    let request = post_multipart("/api/ocr/image", &[("file", Some("Scan.PNG"), b"\x89PNG")]);
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Image processed successfully");
    assert!(body["text"].as_str().unwrap().contains("image"));
    assert_eq!(body["blocks"], json!([]));
}

#[tokio::test]
async fn test_ocr_image_rejects_other_files() {
    let request = post_multipart("/api/ocr/image", &[("file", Some("doc.pdf"), b"%PDF")]);
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "File must be an image");

    let (status, body) = send(app(), post_empty("/api/ocr/image")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No file provided");
}

#[tokio::test]
async fn test_ocr_screenshot_validates_base64() {
    let (status, body) = send(
        app(),
        post_json("/api/ocr/screenshot", json!({ "image_base64": "aGVsbG8=" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Screenshot processed successfully");

    let (status, body) = send(app(), post_json("/api/ocr/screenshot", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No image data provided");

    let (status, body) = send(
        app(),
        post_json("/api/ocr/screenshot", json!({ "image_base64": "***" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid base64 image data");
}

#[tokio::test]
async fn test_rag_stubs() {
    let (status, body) = send(app(), post_json("/api/rag/embed", json!({ "texts": ["a"] }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["embeddings"].as_array().unwrap().len(), 1);

    let (_, body) = send(app(), post_json("/api/rag/upsert", json!({ "docs": [] }))).await;
    assert_eq!(body["status"], "success");

    let (_, body) = send(app(), post_json("/api/rag/query", json!({ "query": "q" }))).await;
    assert_eq!(body["results"], json!([{ "text": "dummy result" }]));

    let (_, body) = send(app(), post_empty("/api/rag/answer")).await;
    assert_eq!(body["answer"], "This is a dummy RAG answer.");
}

#[tokio::test]
async fn test_tts_passes_text_to_synthesizer() {
    let synth = Arc::new(RecordingSynthesizer::default());
    let services = Services {
        tts: synth.clone(),
        ..Services::placeholders()
    };
    let app = create_router(state_with(StubProvider::echo(), "hf_test_token", services));

    let (status, body) = send(
        app,
        post_json("/api/speech/tts", json!({ "text": "Hello there", "lang": "fr" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["audio_url"], "recorded.mp3");
    let spoken = synth.spoken.lock().unwrap().clone();
    assert_eq!(
        spoken,
        vec![("Hello there".to_string(), "fr".to_string(), "default".to_string())]
    );
}

#[tokio::test]
async fn test_tts_returns_fixed_audio_reference() {
    let (status, body) = send(app(), post_json("/api/speech/tts", json!({ "text": "hi" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["audio_url"], "dummy_audio_url_pyttsx3.mp3");
}

#[tokio::test]
async fn test_tts_requires_text() {
    let (status, body) = send(app(), post_json("/api/speech/tts", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No text provided");
}

#[tokio::test]
async fn test_stt_stub() {
    let request = post_multipart("/api/speech/stt", &[("file", Some("clip.wav"), b"RIFF")]);
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "Dummy speech to text output.");

    let (status, _) = send(app(), post_empty("/api/speech/stt")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_translate_stub() {
    let (status, body) = send(
        app(),
        post_json(
            "/api/translate/translate",
            json!({ "text": "hola", "source": "es", "target": "en" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["translated_text"], "Dummy translated text from es to en.");

    let (_, body) = send(app(), post_json("/api/translate/translate", json!({ "text": "hola" }))).await;
    assert_eq!(body["translated_text"], "Dummy translated text from None to None.");
}

#[tokio::test]
async fn test_youtube_stubs() {
    let (status, body) = send(
        app(),
        post_json("/api/youtube/transcript", json!({ "videoId": "abc123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lang"], "en");
    assert_eq!(body["transcript"][0]["text"], "dummy transcript");

    let (_, body) = send(app(), post_json("/api/youtube/asr", json!({ "videoId": "abc123" }))).await;
    assert_eq!(body["transcript"][0]["text"], "dummy ASR transcript");

    let (_, body) = send(
        app(),
        post_json("/api/youtube/summarize", json!({ "videoId": "abc123" })),
    )
    .await;
    assert_eq!(body["summary"], "Dummy YouTube summary.");

    let (_, body) = send(
        app(),
        post_json("/api/youtube/qa", json!({ "videoId": "abc123", "question": "why?" })),
    )
    .await;
    assert_eq!(body["answer"], "Dummy YouTube Q&A answer.");
}
