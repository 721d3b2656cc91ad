//! Wire types for the retrieval backend contract.

use serde::{Deserialize, Serialize};

/// A single entry returned by a retrieval backend.
///
/// Backends agree on `content`, `title` and `source`, but are free to
/// attach anything else; unknown fields are carried in `extra` so an
/// entry without `content` can still be rendered faithfully.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RetrievalResult {
    /// Build a plain text entry. Used by stub backends and tests.
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            title: None,
            source: None,
            extra: serde_json::Map::new(),
        }
    }

    /// The text merged into the prompt: `content` when present, otherwise
    /// the whole entry as compact JSON so nothing the backend sent is
    /// silently dropped.
    pub fn display_content(&self) -> String {
        match &self.content {
            Some(content) => content.clone(),
            None => serde_json::to_string(self).unwrap_or_default(),
        }
    }
}

/// Response payload of `POST /search`.
///
/// Every field tolerates being absent: a backend that omits `results`
/// degrades to zero results instead of failing the whole request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub results: Vec<RetrievalResult>,
    #[serde(default)]
    pub status: String,
}

/// Response payload of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

/// Optional search parameters forwarded alongside the query.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchOptions {
    /// Cap on the number of results the backend should return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn search_response_tolerates_missing_results() {
        let parsed: SearchResponse = serde_json::from_value(json!({})).unwrap();
        assert!(parsed.results.is_empty());
        assert_eq!(parsed.query, "");
    }

    #[test]
    fn unknown_result_fields_are_kept() {
        let parsed: RetrievalResult = serde_json::from_value(json!({
            "content": "Critical photons are produced by ray receivers.",
            "score": 0.92,
            "chunk_id": 17
        }))
        .unwrap();

        assert_eq!(
            parsed.content.as_deref(),
            Some("Critical photons are produced by ray receivers.")
        );
        assert_eq!(parsed.extra["score"], json!(0.92));
        assert_eq!(parsed.extra["chunk_id"], json!(17));
    }

    #[test]
    fn display_content_prefers_content() {
        let result = RetrievalResult::from_content("Solar sails decay over time.");
        assert_eq!(result.display_content(), "Solar sails decay over time.");
    }

    #[test]
    fn display_content_falls_back_to_raw_json() {
        let parsed: RetrievalResult =
            serde_json::from_value(json!({ "title": "Ray Receiver", "score": 1 })).unwrap();
        let rendered = parsed.display_content();
        assert!(rendered.contains("\"title\":\"Ray Receiver\""), "got: {}", rendered);
        assert!(rendered.contains("\"score\":1"), "got: {}", rendered);
    }

    #[test]
    fn search_options_omit_unset_fields() {
        let rendered = serde_json::to_value(SearchOptions::default()).unwrap();
        assert_eq!(rendered, json!({}));

        let rendered = serde_json::to_value(SearchOptions { limit: Some(5) }).unwrap();
        assert_eq!(rendered, json!({ "limit": 5 }));
    }
}
