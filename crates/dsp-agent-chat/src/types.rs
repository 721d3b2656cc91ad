//! Chat wire types.

use serde::{Deserialize, Serialize};

use dsp_agent_core::{Error, Result};

/// One turn of a conversation. `role` is passed through to the
/// completion backend untouched; the backend enforces allowed values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    /// Build a user-role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Incoming `/chat` request body.
///
/// `message` stays optional at the serde level so a body without one is
/// rejected by the handler with a 400 instead of a deserialization
/// error.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    /// Prior turns, forwarded ahead of the new message.
    #[serde(default)]
    pub conversation: Vec<Message>,
}

impl ChatRequest {
    /// The non-empty user message, or the validation error whose text
    /// goes on the wire as-is.
    pub fn message(&self) -> Result<&str> {
        match self.message.as_deref() {
            Some(message) if !message.is_empty() => Ok(message),
            _ => Err(Error::Validation("Message is required".to_string())),
        }
    }
}

/// Per-backend counts of results merged into the prompt. A backend that
/// was skipped or failed counts zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCounts {
    pub domain: usize,
    pub research: usize,
}

/// Successful `/chat` response body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub sources: SourceCounts,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_body_parses_with_no_message() {
        let parsed: ChatRequest = serde_json::from_value(json!({})).unwrap();
        assert!(parsed.message.is_none());
        assert!(parsed.conversation.is_empty());
    }

    #[test]
    fn full_request_parses() {
        let parsed: ChatRequest = serde_json::from_value(json!({
            "message": "How do Critical Photons work?",
            "conversation": [
                { "role": "user", "content": "Hi" },
                { "role": "assistant", "content": "Hello!" }
            ]
        }))
        .unwrap();

        assert_eq!(parsed.message.as_deref(), Some("How do Critical Photons work?"));
        assert_eq!(parsed.conversation.len(), 2);
        assert_eq!(parsed.conversation[1].role, "assistant");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let parsed: ChatRequest =
            serde_json::from_value(json!({ "message": "hi", "session_id": "abc" })).unwrap();
        assert_eq!(parsed.message.as_deref(), Some("hi"));
    }

    #[test]
    fn message_accessor_rejects_missing_and_empty() {
        let parsed: ChatRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(parsed.message().unwrap_err().to_string(), "Message is required");

        let parsed: ChatRequest = serde_json::from_value(json!({ "message": "" })).unwrap();
        assert!(parsed.message().is_err());

        let parsed: ChatRequest = serde_json::from_value(json!({ "message": "hi" })).unwrap();
        assert_eq!(parsed.message().unwrap(), "hi");
    }

    #[test]
    fn source_counts_serialize_by_name() {
        let counts = SourceCounts { domain: 3, research: 2 };
        assert_eq!(
            serde_json::to_value(counts).unwrap(),
            json!({ "domain": 3, "research": 2 })
        );
    }
}
