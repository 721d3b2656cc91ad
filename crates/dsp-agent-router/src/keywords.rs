//! Keyword predicates deciding which retrieval backends a query needs.
//!
//! Matching is case-insensitive substring containment, so a term can
//! match inside a larger word ("atmosphere" matches "sphere"). Queries
//! are short enough that a linear scan over both tables is plenty.

/// Game terms: items, mechanics, and jargon covered by the
/// documentation backend.
const GAME_TERMS: &[&str] = &[
    "dyson sphere program",
    "dsp",
    "critical photon",
    "antimatter",
    "solar sail",
    "sphere",
    "swarm",
    "logistics",
    "recipe",
    "technology",
    "blueprint",
];

/// Science and engineering terms routed to the web research backend.
const RESEARCH_TERMS: &[&str] = &[
    "physics",
    "real",
    "actually",
    "possible",
    "theoretical",
    "engineering",
    "energy",
    "fusion",
    "stellar",
    "research",
    "study",
    "paper",
];

/// True when the query mentions game content.
pub fn is_game_query(text: &str) -> bool {
    let lower = text.to_lowercase();
    GAME_TERMS.iter().any(|term| lower.contains(term))
}

/// True when the query asks about real-world science or engineering.
pub fn is_research_query(text: &str) -> bool {
    let lower = text.to_lowercase();
    RESEARCH_TERMS.iter().any(|term| lower.contains(term))
}
