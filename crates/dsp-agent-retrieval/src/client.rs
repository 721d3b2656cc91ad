//! HTTP client for one retrieval backend.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use dsp_agent_core::{Error, Result};

use crate::types::{HealthStatus, RetrievalResult, SearchOptions, SearchResponse};

/// Per-call timeout covering connect, send and read.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Anything the query router can pull context from.
#[async_trait]
pub trait SearchSource: Send + Sync {
    /// Logical backend name used in logs and error messages.
    fn name(&self) -> &str;

    /// Run a query, returning results in backend relevance order.
    async fn search(&self, query: &str, options: &SearchOptions) -> Result<Vec<RetrievalResult>>;
}

/// Client for one retrieval backend, configured by logical name and base
/// URL. Calls are single-shot: no retries, failures surface to the
/// caller as [`Error::Retrieval`] carrying the backend name.
pub struct RetrievalBackend {
    name: String,
    base_url: String,
    http: reqwest::Client,
}

impl RetrievalBackend {
    /// Create a client for the backend at `base_url`.
    pub fn new(name: &str, base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Retrieval {
                backend: name.to_string(),
                message: format!("client setup failed: {}", e),
            })?;

        Ok(Self {
            name: name.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// The backend's base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe backend liveness via `GET /health`.
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = format!("{}/health", self.base_url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.error(format!("health check failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(self.error(format!("health check failed: status {}", response.status())));
        }

        response
            .json::<HealthStatus>()
            .await
            .map_err(|e| self.error(format!("health check failed: {}", e)))
    }

    fn error(&self, message: String) -> Error {
        Error::Retrieval {
            backend: self.name.clone(),
            message,
        }
    }
}

#[async_trait]
impl SearchSource for RetrievalBackend {
    fn name(&self) -> &str {
        &self.name
    }

    async fn search(&self, query: &str, options: &SearchOptions) -> Result<Vec<RetrievalResult>> {
        let url = format!("{}/search", self.base_url);

        let mut body = serde_json::Map::new();
        body.insert("query".to_string(), serde_json::Value::String(query.to_string()));
        if let Some(limit) = options.limit {
            body.insert("limit".to_string(), serde_json::Value::from(limit));
        }

        debug!("{} search: {}", self.name, query);

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.error(format!("search failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(self.error(format!("search failed: status {}", response.status())));
        }

        let payload: SearchResponse = response
            .json()
            .await
            .map_err(|e| self.error(format!("search failed: {}", e)))?;

        debug!("{} search returned {} results", self.name, payload.results.len());
        Ok(payload.results)
    }
}
