//! Chat route — the main request path: validate, route retrieval,
//! complete, respond.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use tracing::{error, info};

use dsp_agent_chat::types::{ChatRequest, ChatResponse, Message};
use dsp_agent_chat::SYSTEM_PROMPT;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/chat", post(chat))
}

async fn chat(State(state): State<Arc<AppState>>, Json(req): Json<ChatRequest>) -> Response {
    let message = match req.message() {
        Ok(message) => message,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response();
        }
    };

    info!("processing query: {:?}", message);

    // Retrieval is best-effort; assemble never fails.
    let augmented = state.router.assemble(message).await;

    let mut messages = req.conversation;
    messages.push(Message::user(augmented.text));

    match state.completion.complete(&messages, SYSTEM_PROMPT).await {
        Ok(response) => (
            StatusCode::OK,
            Json(ChatResponse {
                response,
                sources: augmented.sources,
                timestamp: chrono::Utc::now().to_rfc3339(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("chat request failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": "Internal server error",
                    "details": e.to_string(),
                    "timestamp": chrono::Utc::now().to_rfc3339(),
                })),
            )
                .into_response()
        }
    }
}
