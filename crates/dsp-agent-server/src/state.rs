//! Shared application state.

use std::sync::Arc;

use dsp_agent_chat::CompletionClient;
use dsp_agent_core::{AgentConfig, Result};
use dsp_agent_retrieval::RetrievalBackend;
use dsp_agent_router::QueryRouter;

/// Application state built once at startup and shared by every handler.
/// Configuration is fully resolved before this exists; handlers never
/// read the environment.
pub struct AppState {
    pub config: AgentConfig,
    pub docs: Arc<RetrievalBackend>,
    pub research: Arc<RetrievalBackend>,
    pub router: QueryRouter,
    pub completion: CompletionClient,
}

impl AppState {
    pub fn new(config: AgentConfig) -> Result<Self> {
        let docs = Arc::new(RetrievalBackend::new("docs", &config.backends.docs)?);
        let research = Arc::new(RetrievalBackend::new("research", &config.backends.research)?);
        let router = QueryRouter::new(docs.clone(), research.clone());
        let completion = CompletionClient::new(&config.claude)?;

        Ok(Self {
            config,
            docs,
            research,
            router,
            completion,
        })
    }
}
