//! Domain types shared across the pipeline.

use serde::{Deserialize, Serialize};

/// Bounds for the per-search result count
pub const MIN_RESULTS: u32 = 1;
pub const MAX_RESULTS: u32 = 100;

/// One search invocation's inputs, immutable once handed to the orchestrator.
///
/// Dates are ISO-8601 strings passed through to the provider unchanged;
/// `None` means no bound on that side of the range.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub text: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub num_results: u32,
}

impl SearchQuery {
    /// Build a query, clamping the result count into [1, 100].
    pub fn new(
        text: impl Into<String>,
        start_date: Option<String>,
        end_date: Option<String>,
        num_results: u32,
    ) -> Self {
        Self {
            text: text.into(),
            start_date,
            end_date,
            num_results: num_results.clamp(MIN_RESULTS, MAX_RESULTS),
        }
    }

    /// Whether the query text is empty after trimming
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Validate the query text, for callers that want a typed error instead
    /// of the orchestrator's notice path.
    pub fn validated(self) -> crate::error::Result<Self> {
        if self.is_blank() {
            Err(crate::error::SearchError::EmptyQuery)
        } else {
            Ok(self)
        }
    }
}

/// One result record from the provider. Any field may be empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, rename = "publishedDate")]
    pub published_date: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub favicon: String,
}

/// Decoded provider response envelope
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default, rename = "requestId")]
    pub request_id: String,
    #[serde(default, rename = "resolvedSearchType")]
    pub resolved_search_type: String,
    #[serde(default)]
    pub results: Vec<SearchResult>,
}
