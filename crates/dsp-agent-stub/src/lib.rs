//! Stub retrieval backends.
//!
//! Canned responses over the real wire contract, standing in for the
//! documentation and research services during local development and in
//! integration tests. One parameterized router covers both; pick which
//! service to impersonate with [`StubService`].

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use dsp_agent_retrieval::types::{HealthStatus, RetrievalResult, SearchResponse};

/// Which backend this stub impersonates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubService {
    Docs,
    Research,
}

impl StubService {
    /// Service name reported by `/health`.
    pub fn service_name(self) -> &'static str {
        match self {
            StubService::Docs => "docs-stub",
            StubService::Research => "research-stub",
        }
    }

    fn canned_result(self, query: &str) -> RetrievalResult {
        let (title, content) = match self {
            StubService::Docs => (
                "DSP Documentation Search",
                format!(
                    "Stub documentation result for query: {}. \
                     Wire up the real retrieval service for actual game data.",
                    query
                ),
            ),
            StubService::Research => (
                "Physics Research Search",
                format!(
                    "Stub research result for query: {}. \
                     Wire up the real web search service for actual papers.",
                    query
                ),
            ),
        };

        RetrievalResult {
            content: Some(content),
            title: Some(title.to_string()),
            source: Some(self.service_name().to_string()),
            extra: serde_json::Map::new(),
        }
    }
}

/// Shared stub state. `search_hits` counts served searches so tests can
/// assert which collaborators a request did (or did not) touch.
#[derive(Clone)]
pub struct StubState {
    service: StubService,
    pub search_hits: Arc<AtomicUsize>,
}

impl StubState {
    pub fn new(service: StubService) -> Self {
        Self {
            service,
            search_hits: Arc::new(AtomicUsize::new(0)),
        }
    }
}

/// Build the stub backend router: `GET /`, `GET /health`, and `/search`
/// as both GET (query string) and POST (JSON body).
pub fn stub_router(state: StubState) -> Router {
    Router::new()
        .route("/", get(info))
        .route("/health", get(health))
        .route("/search", get(search_get).post(search_post))
        .with_state(state)
}

async fn info(State(state): State<StubState>) -> Json<serde_json::Value> {
    Json(json!({
        "service": state.service.service_name(),
        "status": "running",
        "endpoints": ["/health", "/search"],
    }))
}

async fn health(State(state): State<StubState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        service: state.service.service_name().to_string(),
    })
}

#[derive(Deserialize)]
struct SearchParams {
    q: Option<String>,
    query: Option<String>,
}

async fn search_get(State(state): State<StubState>, Query(params): Query<SearchParams>) -> Response {
    answer(state, params.q.or(params.query))
}

#[derive(Deserialize)]
struct SearchBody {
    query: Option<String>,
}

async fn search_post(State(state): State<StubState>, Json(body): Json<SearchBody>) -> Response {
    answer(state, body.query)
}

fn answer(state: StubState, query: Option<String>) -> Response {
    let query = match query.filter(|q| !q.is_empty()) {
        Some(query) => query,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Missing query parameter" })),
            )
                .into_response();
        }
    };

    state.search_hits.fetch_add(1, Ordering::SeqCst);

    let response = SearchResponse {
        results: vec![state.service.canned_result(&query)],
        query,
        status: "stub".to_string(),
    };

    (StatusCode::OK, Json(response)).into_response()
}
