//! Core types shared by every DSP agent crate: configuration loading
//! and the common error taxonomy.

pub mod config;
pub mod error;

pub use config::{AgentConfig, BackendConfig, ClaudeConfig, DEFAULT_API_URL, DEFAULT_PORT};
pub use error::{Error, Result};
