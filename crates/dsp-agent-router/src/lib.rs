//! Query routing for the DSP agent.
//!
//! Decides which retrieval backends a query needs, fans the lookups out
//! concurrently, and folds the results into labeled context blocks
//! appended to the user message.

pub mod context;
pub mod keywords;
pub mod router;

pub use context::{render_block, DOCS_HEADER, RESEARCH_HEADER};
pub use keywords::{is_game_query, is_research_query};
pub use router::{AugmentedMessage, QueryRouter, RESEARCH_QUERY_SUFFIX};
