//! Retrieval backend clients.
//!
//! Both retrieval services speak the same small contract (`POST /search`,
//! `GET /health`), so a single parameterized client covers the
//! documentation backend and the research backend alike.

pub mod client;
pub mod types;

pub use client::{RetrievalBackend, SearchSource, REQUEST_TIMEOUT};
pub use types::{HealthStatus, RetrievalResult, SearchOptions, SearchResponse};
