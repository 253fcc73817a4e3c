//! End-to-end API tests driving the router with a stubbed upstream provider.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use promptmaster::domain::errors::GatewayError;
use promptmaster::ports::TextGenProvider;
use promptmaster_server::adapters::InMemoryPromptRepository;
use promptmaster_server::application::PromptService;
use promptmaster_server::{app_router, AppState};

struct StubProvider {
    reply: &'static str,
}

#[async_trait]
impl TextGenProvider for StubProvider {
    async fn generate(
        &self,
        _prompt: &str,
        _context: Option<&str>,
    ) -> Result<String, GatewayError> {
        Ok(self.reply.to_string())
    }

    fn provider_name(&self) -> &str {
        "stub"
    }
}

/// Fails at the model-listing step, like an unreachable upstream.
struct UnreachableProvider;

#[async_trait]
impl TextGenProvider for UnreachableProvider {
    async fn generate(
        &self,
        _prompt: &str,
        _context: Option<&str>,
    ) -> Result<String, GatewayError> {
        Err(GatewayError::Unavailable("connection refused".to_string()))
    }

    fn provider_name(&self) -> &str {
        "stub"
    }
}

fn state_with(provider: Arc<dyn TextGenProvider>, upload_dir: &Path) -> AppState {
    let repo = Arc::new(InMemoryPromptRepository::new());
    AppState {
        prompt_service: Arc::new(PromptService::new(repo, provider)),
        upload_dir: upload_dir.to_path_buf(),
    }
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn templates_lists_the_catalog() {
    let state = state_with(Arc::new(StubProvider { reply: "ok" }), Path::new("uploads"));
    let app = app_router(state, Path::new("public"));

    let response = app.oneshot(get_request("/api/templates")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let templates = body.as_array().unwrap();
    assert_eq!(templates.len(), 4);
    assert_eq!(templates[0]["id"], "zero-shot");
    assert_eq!(templates[3]["id"], "chain-of-thought");
}

#[tokio::test]
async fn process_prompt_records_history() {
    let state = state_with(
        Arc::new(StubProvider { reply: "Summary." }),
        Path::new("uploads"),
    );

    let app = app_router(state.clone(), Path::new("public"));
    let response = app
        .oneshot(json_request(
            "/api/process-prompt",
            r#"{"prompt":"summarize X","promptType":"zero-shot","role":"a librarian","format":"text"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["response"], "Summary.");
    let prompt_id = body["promptId"].as_str().unwrap().to_string();
    assert!(!prompt_id.is_empty());

    // The record heads the history.
    let app = app_router(state.clone(), Path::new("public"));
    let response = app.oneshot(get_request("/api/prompts")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let history = body_json(response).await;
    let records = history.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], prompt_id.as_str());
    assert_eq!(records[0]["originalPrompt"], "summarize X");
    assert_eq!(
        records[0]["processedPrompt"],
        "You are a librarian. summarize X Always respond in text format."
    );

    // And is reachable by id.
    let app = app_router(state, Path::new("public"));
    let response = app
        .oneshot(get_request(&format!("/api/prompts/{prompt_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let record = body_json(response).await;
    assert_eq!(record["response"], "Summary.");
}

#[tokio::test]
async fn upstream_failure_returns_envelope_and_records_nothing() {
    let state = state_with(Arc::new(UnreachableProvider), Path::new("uploads"));

    let app = app_router(state.clone(), Path::new("public"));
    let response = app
        .oneshot(json_request(
            "/api/process-prompt",
            r#"{"prompt":"summarize X","promptType":"zero-shot","role":"a librarian","format":"text"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Failed to get response from Gemini AI");

    let app = app_router(state, Path::new("public"));
    let response = app.oneshot(get_request("/api/prompts")).await.unwrap();
    let history = body_json(response).await;
    assert_eq!(history.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn unknown_prompt_lookup_is_404() {
    let state = state_with(Arc::new(StubProvider { reply: "ok" }), Path::new("uploads"));
    let app = app_router(state, Path::new("public"));

    let response = app
        .oneshot(get_request("/api/prompts/nonexistent"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Prompt not found");
}

#[tokio::test]
async fn upload_stores_the_file_and_acknowledges() {
    let upload_dir = tempfile::tempdir().unwrap();
    let state = state_with(Arc::new(StubProvider { reply: "ok" }), upload_dir.path());
    let app = app_router(state, Path::new("public"));

    let boundary = "test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"notes.txt\"\r\n\
         Content-Type: text/plain\r\n\r\n\
         hello context\r\n\
         --{boundary}--\r\n"
    );
    let request = Request::builder()
        .method("POST")
        .uri("/api/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let ack = body_json(response).await;
    assert_eq!(ack["success"], true);
    assert_eq!(ack["originalName"], "notes.txt");
    let filename = ack["filename"].as_str().unwrap();
    assert!(filename.ends_with("-notes.txt"));

    let stored = std::fs::read_to_string(upload_dir.path().join(filename)).unwrap();
    assert_eq!(stored, "hello context");
}

#[tokio::test]
async fn upload_without_file_field_is_400() {
    let upload_dir = tempfile::tempdir().unwrap();
    let state = state_with(Arc::new(StubProvider { reply: "ok" }), upload_dir.path());
    let app = app_router(state, Path::new("public"));

    let boundary = "test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"other\"\r\n\r\n\
         value\r\n\
         --{boundary}--\r\n"
    );
    let request = Request::builder()
        .method("POST")
        .uri("/api/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "No file uploaded");
}
