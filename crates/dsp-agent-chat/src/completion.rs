//! Client for the remote Messages API completion endpoint.

use serde_json::json;
use tracing::debug;

use dsp_agent_core::{ClaudeConfig, Error, Result};

use crate::types::Message;

/// Token budget for every completion call.
pub const MAX_TOKENS: u32 = 4000;

/// Version header the Messages API requires.
const API_VERSION: &str = "2023-06-01";

/// Completion client. One call per chat request, no retries, no
/// streaming; the full generated text comes back in a single response.
pub struct CompletionClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl CompletionClient {
    pub fn new(config: &ClaudeConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::Completion(format!("client setup failed: {}", e)))?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    /// The configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send the conversation and return the generated text.
    pub async fn complete(&self, messages: &[Message], system: &str) -> Result<String> {
        let body = json!({
            "model": self.model,
            "max_tokens": MAX_TOKENS,
            "system": system,
            "messages": messages,
        });

        debug!("completion request: model={}, {} messages", self.model, messages.len());

        let response = self
            .http
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Completion(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::Completion(format!("API error {}: {}", status, error_text)));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Error::Completion(format!("invalid response body: {}", e)))?;

        extract_text(&payload)
    }
}

/// Pull the generated text out of a Messages API response body.
fn extract_text(payload: &serde_json::Value) -> Result<String> {
    payload["content"][0]["text"]
        .as_str()
        .map(|text| text.to_string())
        .ok_or_else(|| Error::Completion("response carries no text content".to_string()))
}
