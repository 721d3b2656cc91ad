//! Error types for the DSP agent.

use thiserror::Error;

/// Common error type for all agent crates.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration could not be read, parsed, or resolved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A request was rejected before any backend was consulted. The
    /// message is wire-facing text, so no prefix.
    #[error("{0}")]
    Validation(String),

    /// A retrieval backend call failed. `backend` is the logical name
    /// the backend was registered under ("docs" or "research").
    #[error("{backend} backend: {message}")]
    Retrieval { backend: String, message: String },

    /// The completion endpoint rejected or failed a request.
    #[error("Completion error: {0}")]
    Completion(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the agent crates.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retrieval_error_names_the_backend() {
        let err = Error::Retrieval {
            backend: "docs".to_string(),
            message: "search failed: connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "docs backend: search failed: connection refused");
    }

    #[test]
    fn validation_errors_display_bare() {
        let err = Error::Validation("Message is required".to_string());
        assert_eq!(err.to_string(), "Message is required");
    }

    #[test]
    fn io_errors_convert() {
        fn read() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/a/file")?)
        }
        assert!(matches!(read(), Err(Error::Io(_))));
    }

    #[test]
    fn json_errors_convert() {
        fn parse() -> Result<serde_json::Value> {
            Ok(serde_json::from_str("{ not json")?)
        }
        assert!(matches!(parse(), Err(Error::Json(_))));
    }
}
