//! HTTP route handlers — matches the Express agent's API surface.

pub mod chat;
pub mod config;
pub mod health;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(chat::routes())
        .merge(health::routes())
        .merge(config::routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
