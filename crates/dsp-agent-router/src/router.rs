//! The query router: predicate checks, concurrent retrieval fan-out,
//! and assembly of the augmented message.

use std::sync::Arc;

use tracing::{debug, info, warn};

use dsp_agent_chat::types::SourceCounts;
use dsp_agent_retrieval::client::SearchSource;
use dsp_agent_retrieval::types::{RetrievalResult, SearchOptions};

use crate::context::{render_block, DOCS_HEADER, RESEARCH_HEADER};
use crate::keywords::{is_game_query, is_research_query};

/// Suffix appended to research-bound queries to bias the web backend
/// toward recent scientific material.
pub const RESEARCH_QUERY_SUFFIX: &str = " physics research paper recent";

/// The original user message plus any appended context blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentedMessage {
    /// Prompt text sent to the completion backend.
    pub text: String,
    /// How many results each backend contributed.
    pub sources: SourceCounts,
}

/// Decides which retrieval backends to consult for a query and merges
/// their results into labeled context blocks.
///
/// The two lookups are independent and best-effort: a backend that is
/// down or misbehaving is logged and contributes nothing, it never
/// fails the request. A query matching neither keyword table skips
/// retrieval entirely and comes back unchanged.
pub struct QueryRouter {
    docs: Arc<dyn SearchSource>,
    research: Arc<dyn SearchSource>,
}

impl QueryRouter {
    pub fn new(docs: Arc<dyn SearchSource>, research: Arc<dyn SearchSource>) -> Self {
        Self { docs, research }
    }

    /// Build the augmented message for `message`.
    ///
    /// The documentation backend receives the query verbatim; the
    /// research backend receives it with [`RESEARCH_QUERY_SUFFIX`]
    /// appended. The documentation block always precedes the research
    /// block, each separated from what came before by a blank line.
    pub async fn assemble(&self, message: &str) -> AugmentedMessage {
        let wants_docs = is_game_query(message);
        let wants_research = is_research_query(message);

        info!("routing query: docs={}, research={}", wants_docs, wants_research);

        let research_query = format!("{}{}", message, RESEARCH_QUERY_SUFFIX);

        let (docs_results, research_results) = tokio::join!(
            fetch(self.docs.as_ref(), message, wants_docs),
            fetch(self.research.as_ref(), &research_query, wants_research),
        );

        let mut text = message.to_string();
        let mut sources = SourceCounts::default();

        if let Some(block) = render_block(DOCS_HEADER, &docs_results) {
            sources.domain = docs_results.len();
            text.push_str("\n\n");
            text.push_str(&block);
        }
        if let Some(block) = render_block(RESEARCH_HEADER, &research_results) {
            sources.research = research_results.len();
            text.push_str("\n\n");
            text.push_str(&block);
        }

        AugmentedMessage { text, sources }
    }
}

/// Run one backend lookup when routed there, absorbing failures as an
/// empty result list.
async fn fetch(source: &dyn SearchSource, query: &str, routed: bool) -> Vec<RetrievalResult> {
    if !routed {
        return Vec::new();
    }

    debug!("searching {}: {}", source.name(), query);

    match source.search(query, &SearchOptions::default()).await {
        Ok(results) => results,
        Err(e) => {
            warn!("retrieval skipped: {}", e);
            Vec::new()
        }
    }
}
