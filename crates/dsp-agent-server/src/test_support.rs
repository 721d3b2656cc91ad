//! Shared helpers for route handler tests: in-process collaborators on
//! ephemeral ports and request plumbing for driving the router directly.

use std::sync::atomic::AtomicUsize;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower::ServiceExt;

use dsp_agent_core::{AgentConfig, BackendConfig, ClaudeConfig};
use dsp_agent_stub::{stub_router, StubService, StubState};

use crate::state::AppState;

/// Serve `app` on an ephemeral local port and return its base URL.
pub async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Spawn one stub retrieval backend; returns its base URL and the
/// served-search counter.
pub async fn spawn_stub(service: StubService) -> (String, Arc<AtomicUsize>) {
    let state = StubState::new(service);
    let hits = state.search_hits.clone();
    let url = spawn_server(stub_router(state)).await;
    (url, hits)
}

/// A URL nothing is listening on; connections are refused immediately.
pub async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    url
}

/// Spawn a completion endpoint that always replies with `text`.
pub async fn spawn_completion_ok(text: &'static str) -> String {
    let app = Router::new().route(
        "/v1/messages",
        post(move || async move {
            Json(json!({ "content": [ { "type": "text", "text": text } ] }))
        }),
    );
    let base = spawn_server(app).await;
    format!("{}/v1/messages", base)
}

/// Spawn a completion endpoint that records every request body before
/// replying with `text`.
pub async fn spawn_completion_capture(text: &'static str) -> (String, Arc<Mutex<Vec<Value>>>) {
    let requests: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = requests.clone();

    let app = Router::new().route(
        "/v1/messages",
        post(move |Json(body): Json<Value>| {
            let sink = sink.clone();
            async move {
                sink.lock().unwrap().push(body);
                Json(json!({ "content": [ { "type": "text", "text": text } ] }))
            }
        }),
    );
    let base = spawn_server(app).await;
    (format!("{}/v1/messages", base), requests)
}

/// Spawn a completion endpoint that rejects every request.
pub async fn spawn_completion_failing() -> String {
    let app = Router::new().route(
        "/v1/messages",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": { "type": "api_error", "message": "overloaded" } })),
            )
        }),
    );
    let base = spawn_server(app).await;
    format!("{}/v1/messages", base)
}

pub fn test_config(docs_url: &str, research_url: &str, api_url: &str) -> AgentConfig {
    AgentConfig {
        name: "dsp-agent-test".to_string(),
        version: "0.0.0".to_string(),
        backends: BackendConfig {
            docs: docs_url.to_string(),
            research: research_url.to_string(),
        },
        claude: ClaudeConfig {
            model: "claude-sonnet-4-20250514".to_string(),
            api_key: "sk-test".to_string(),
            api_url: api_url.to_string(),
        },
        port: 0,
    }
}

pub fn test_app(config: AgentConfig) -> Router {
    let state = Arc::new(AppState::new(config).unwrap());
    crate::routes::build_router(state)
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    read_json(app.oneshot(request).await.unwrap()).await
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    read_json(app.oneshot(request).await.unwrap()).await
}

async fn read_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}
