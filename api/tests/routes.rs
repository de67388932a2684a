//! Router-level tests: question validation, upload handling, session state.
//!
//! The completion client points at an unroutable local endpoint, so any
//! request that actually reaches it fails fast with a transport error.
//! Paths that must not touch the upstream are asserted by their exact
//! validation payload.

use std::sync::Arc;

use api::{AppState, router};
use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use llm_client::{CompletionConfig, OpenAiService};
use serde_json::Value;
use tower::ServiceExt;

const BOUNDARY: &str = "x-test-boundary";

fn test_state() -> Arc<AppState> {
    let cfg = CompletionConfig {
        model: "gpt-4o-mini".into(),
        // nothing listens here; reaching the client is itself a failure
        endpoint: "http://127.0.0.1:9".into(),
        api_key: "test-key".into(),
        max_tokens: 16,
        temperature: None,
        timeout_secs: 1,
    };
    Arc::new(AppState::new(OpenAiService::new(cfg).unwrap()))
}

fn ask(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/ask")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn upload(parts: &[(&str, &str)]) -> Request<Body> {
    let mut body = String::new();
    for (name, content) in parts {
        body.push_str(&format!("--{BOUNDARY}\r\n"));
        body.push_str(&format!(
            "Content-Disposition: form-data; name=\"{name}\"; filename=\"{name}.bin\"\r\n"
        ));
        body.push_str("Content-Type: application/octet-stream\r\n\r\n");
        body.push_str(content);
        body.push_str("\r\n");
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));

    Request::builder()
        .method("POST")
        .uri("/api/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn empty_question_is_rejected_without_upstream_call() {
    let state = test_state();
    let app = router(state);

    for body in [r#"{"question":""}"#, r#"{"question":"   \n "}"#] {
        let response = app.clone().oneshot(ask(body)).await.unwrap();

        // 200 with an error payload; a transport error here would mean the
        // upstream client was (wrongly) invoked.
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["error"], "No question provided.");
        assert!(json.get("answer").is_none());
    }
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = router(test_state());

    let response = app.oneshot(ask("not json at all")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().starts_with("bad request"));
}

#[tokio::test]
async fn upstream_failure_maps_to_500_error_payload() {
    let app = router(test_state());

    let response = app
        .oneshot(ask(r#"{"question":"what is the average?"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("transport error"));
}

#[tokio::test]
async fn upload_stores_csv_and_text() {
    let state = test_state();
    let app = router(state.clone());

    let response = app
        .oneshot(upload(&[
            ("data", "name,age\nalice,30\nbob,41\n"),
            ("text", "quarterly notes"),
        ]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let answer = json["answer"].as_str().unwrap();
    assert!(answer.contains("2 rows and 2 columns"));
    assert!(answer.contains("text file"));

    let session = state.session.read().await;
    assert_eq!(session.dataset().unwrap().row_count(), 2);
    assert_eq!(session.text(), Some("quarterly notes"));
}

#[tokio::test]
async fn upload_is_last_write_wins() {
    let state = test_state();
    let app = router(state.clone());

    let first = app
        .clone()
        .oneshot(upload(&[("data", "a,b\n1,2\n")]))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .oneshot(upload(&[("data", "c,d,e\n1,2,3\n4,5,6\n")]))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::OK);

    let session = state.session.read().await;
    let dataset = session.dataset().unwrap();
    assert_eq!(dataset.headers(), ["c", "d", "e"]);
    assert_eq!(dataset.row_count(), 2);
}

#[tokio::test]
async fn malformed_csv_is_a_server_error_and_leaves_state_untouched() {
    let state = test_state();
    let app = router(state.clone());

    let seed = app
        .clone()
        .oneshot(upload(&[("data", "a,b\n1,2\n")]))
        .await
        .unwrap();
    assert_eq!(seed.status(), StatusCode::OK);

    // ragged row: three fields under a two-column header
    let response = app
        .oneshot(upload(&[("data", "a,b\n1,2,3\n")]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("CSV parse error"));

    let session = state.session.read().await;
    assert_eq!(session.dataset().unwrap().headers(), ["a", "b"]);
}

#[tokio::test]
async fn image_part_is_accepted_and_ignored() {
    let state = test_state();
    let app = router(state.clone());

    let response = app
        .oneshot(upload(&[("image", "\u{1}\u{2}fake-image-bytes")]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json["answer"],
        "Nothing stored: no CSV or text file in the upload."
    );

    let session = state.session.read().await;
    assert!(session.dataset().is_none());
    assert!(session.text().is_none());
}
