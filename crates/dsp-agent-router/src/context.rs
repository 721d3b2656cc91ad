//! Context block rendering.
//!
//! A context block is a labeled excerpt of retrieval results appended to
//! the user message for a single completion call. Blocks are rebuilt per
//! request and never persisted.

use dsp_agent_retrieval::types::RetrievalResult;

/// Header labelling documentation results.
pub const DOCS_HEADER: &str = "DSP DOCUMENTATION CONTEXT:";

/// Header labelling research results.
pub const RESEARCH_HEADER: &str = "PHYSICS RESEARCH CONTEXT:";

/// Render one labeled block: the header on its own line, then each
/// result's text separated by blank lines. An empty result list renders
/// nothing at all, not an empty-bodied block.
pub fn render_block(header: &str, results: &[RetrievalResult]) -> Option<String> {
    if results.is_empty() {
        return None;
    }

    let joined = results
        .iter()
        .map(RetrievalResult::display_content)
        .collect::<Vec<_>>()
        .join("\n\n");

    Some(format!("{}\n{}", header, joined))
}
