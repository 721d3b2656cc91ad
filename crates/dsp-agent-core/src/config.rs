//! Agent configuration.
//!
//! Configuration is a JSON document loaded once at startup. String values
//! may reference environment variables with `${VAR}` placeholders, which
//! are resolved before deserialization; a placeholder naming an unset
//! variable is a startup error, so a missing secret is caught before the
//! first request rather than during it.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};

/// Port used when `DSP_AGENT_PORT` is unset.
pub const DEFAULT_PORT: u16 = 3001;

/// Messages API endpoint used when the config file does not override it.
pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";

static ENV_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern"));

/// Base URLs of the two retrieval backends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Game documentation retrieval service.
    pub docs: String,
    /// Web research retrieval service.
    pub research: String,
}

/// Completion backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaudeConfig {
    pub model: String,
    pub api_key: String,
    /// Endpoint override, mainly for tests. Defaults to the public API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

/// Top-level agent configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    pub name: String,
    pub version: String,
    pub backends: BackendConfig,
    pub claude: ClaudeConfig,
    /// Listen port. Comes from `DSP_AGENT_PORT`, not the config file.
    #[serde(skip)]
    pub port: u16,
}

impl AgentConfig {
    /// Load and validate configuration from a JSON file, resolving
    /// `${VAR}` placeholders and the `DSP_AGENT_PORT` override. Any
    /// problem is an error; there is no partial configuration.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;

        let mut config = Self::from_json(&raw)?;
        config.port = port_from_env()?;

        info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a configuration document. The port is left at
    /// [`DEFAULT_PORT`]; [`AgentConfig::load`] applies the environment
    /// override.
    pub fn from_json(raw: &str) -> Result<Self> {
        let document: serde_json::Value = serde_json::from_str(raw)
            .map_err(|e| Error::Config(format!("malformed config document: {}", e)))?;

        let resolved = resolve_env_vars(document)?;

        let mut config: AgentConfig = serde_json::from_value(resolved)
            .map_err(|e| Error::Config(format!("invalid config document: {}", e)))?;
        config.port = DEFAULT_PORT;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.backends.docs.is_empty() {
            return Err(Error::Config("backends.docs URL is empty".to_string()));
        }
        if self.backends.research.is_empty() {
            return Err(Error::Config("backends.research URL is empty".to_string()));
        }
        if self.claude.model.is_empty() {
            return Err(Error::Config("claude.model is empty".to_string()));
        }
        if self.claude.api_key.is_empty() {
            return Err(Error::Config("claude.api_key is empty".to_string()));
        }
        Ok(())
    }
}

fn port_from_env() -> Result<u16> {
    match std::env::var("DSP_AGENT_PORT") {
        Ok(raw) => raw
            .parse()
            .map_err(|_| Error::Config(format!("DSP_AGENT_PORT is not a valid port: {}", raw))),
        Err(_) => Ok(DEFAULT_PORT),
    }
}

/// Walk the document and resolve `${VAR}` placeholders in every string.
fn resolve_env_vars(value: serde_json::Value) -> Result<serde_json::Value> {
    use serde_json::Value;

    Ok(match value {
        Value::String(s) => Value::String(interpolate(&s)?),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(resolve_env_vars)
                .collect::<Result<_>>()?,
        ),
        Value::Object(entries) => Value::Object(
            entries
                .into_iter()
                .map(|(key, value)| Ok((key, resolve_env_vars(value)?)))
                .collect::<Result<_>>()?,
        ),
        other => other,
    })
}

fn interpolate(input: &str) -> Result<String> {
    let mut missing = None;

    let resolved = ENV_PLACEHOLDER.replace_all(input, |caps: &regex::Captures| {
        match std::env::var(&caps[1]) {
            Ok(value) => value,
            Err(_) => {
                missing = Some(caps[1].to_string());
                String::new()
            }
        }
    });

    match missing {
        Some(name) => Err(Error::Config(format!(
            "environment variable {} is not set",
            name
        ))),
        None => Ok(resolved.into_owned()),
    }
}
