//! Config route — static, non-secret agent settings.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/config", get(config))
}

/// Reports name, version, backend names and model. Never URLs or keys.
async fn config(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": state.config.name,
        "version": state.config.version,
        "backends": ["docs", "research"],
        "model": state.config.claude.model,
    }))
}
