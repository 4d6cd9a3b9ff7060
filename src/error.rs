//! Error types for the search-to-notes pipeline.

use thiserror::Error;

/// Errors surfaced by one search invocation.
///
/// Every variant is absorbed at the orchestrator boundary and converted into a
/// single user-visible notice; nothing here propagates past the orchestrator.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Query text was empty or whitespace-only (caught before any network call)
    #[error("please enter a search query")]
    EmptyQuery,

    /// Request failed or the provider returned a non-2xx status
    #[error("search request failed: {0}")]
    Network(String),

    /// Response body was not valid JSON or did not match the expected shape
    #[error("failed to decode search response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Folder or file creation failed
    #[error("filesystem error: {0}")]
    Filesystem(#[from] std::io::Error),
}

impl From<reqwest::Error> for SearchError {
    fn from(e: reqwest::Error) -> Self {
        SearchError::Network(e.to_string())
    }
}

/// Result type for search operations
pub type Result<T> = std::result::Result<T, SearchError>;
