//! Search provider boundary.
//!
//! The orchestrator only ever talks to [`SearchProvider`]; the concrete Exa
//! client lives behind it so tests can mock the network edge and another
//! provider can be swapped in without touching the pipeline.

pub mod exa;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{SearchQuery, SearchResponse};

#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Execute one keyword search and return the decoded result list.
    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse>;
}

pub use exa::ExaClient;
