//! Chat surface of the DSP agent: wire types, the fixed system prompt,
//! and the client for the remote completion endpoint.

pub mod completion;
pub mod prompt;
pub mod types;

pub use completion::{CompletionClient, MAX_TOKENS};
pub use prompt::SYSTEM_PROMPT;
pub use types::{ChatRequest, ChatResponse, Message, SourceCounts};
