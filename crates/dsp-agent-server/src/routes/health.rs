//! Health route — aggregated liveness of both retrieval backends plus
//! the completion configuration.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tracing::warn;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

/// Probes both backends concurrently. Either one failing fails the
/// whole check; the completion backend is reported as configured
/// without a remote call, since probing it would burn quota.
async fn health(State(state): State<Arc<AppState>>) -> Response {
    match tokio::try_join!(state.docs.health(), state.research.health()) {
        Ok((docs, research)) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "ok",
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "services": {
                    "docs": docs,
                    "research": research,
                    "claude": {
                        "status": "configured",
                        "model": state.config.claude.model,
                    },
                },
            })),
        )
            .into_response(),
        Err(e) => {
            warn!("health check failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "status": "error",
                    "error": e.to_string(),
                    "timestamp": chrono::Utc::now().to_rfc3339(),
                })),
            )
                .into_response()
        }
    }
}
