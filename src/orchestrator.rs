//! Search orchestrator — sequences validation, the provider call, and the
//! per-result note writes for one search invocation.
//!
//! Flow: Idle → Validating → Requesting → (NoResults | WritingResults → Done),
//! with every failure absorbed here and surfaced as exactly one notice. The
//! host never sees a panic or a raw error from this module.

use std::sync::Arc;

use crate::error::Result;
use crate::models::SearchQuery;
use crate::notes::NoteWriter;
use crate::provider::SearchProvider;

/// Sink for the transient user-visible notices of one invocation.
/// Implemented by the input collector (terminal, host UI, test recorder).
pub trait Notifier: Send + Sync {
    fn notice(&self, message: &str);
}

/// Terminal outcome of one search invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Query was blank; no network call was made
    Rejected,
    /// Provider returned an empty result list
    NoResults,
    /// All results were written
    Saved(usize),
    /// The request, decode, or a write failed; one error notice was emitted
    Failed(String),
}

pub struct SearchOrchestrator {
    provider: Arc<dyn SearchProvider>,
    writer: NoteWriter,
    notifier: Arc<dyn Notifier>,
}

impl SearchOrchestrator {
    pub fn new(
        provider: Arc<dyn SearchProvider>,
        writer: NoteWriter,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            provider,
            writer,
            notifier,
        }
    }

    /// Run one search to completion. Never returns an error: every failure is
    /// converted into a notice and a [`SearchOutcome::Failed`].
    pub async fn run(&self, query: &SearchQuery) -> SearchOutcome {
        if query.is_blank() {
            self.notifier.notice("Please enter a search query");
            return SearchOutcome::Rejected;
        }

        self.notifier.notice("Searching...");

        match self.execute(query).await {
            Ok(0) => {
                self.notifier.notice("No results found");
                SearchOutcome::NoResults
            }
            Ok(count) => {
                self.notifier
                    .notice(&format!("Successfully saved {} results", count));
                SearchOutcome::Saved(count)
            }
            Err(e) => {
                log::error!("[SEARCH] Query '{}' failed: {}", query.text, e);
                self.notifier.notice(&format!("Error searching: {}", e));
                SearchOutcome::Failed(e.to_string())
            }
        }
    }

    /// Request, decode, and write. Returns the number of notes written;
    /// zero means the provider found nothing.
    async fn execute(&self, query: &SearchQuery) -> Result<usize> {
        debug_assert!(!query.is_blank());

        let response = self.provider.search(query).await?;
        if response.results.is_empty() {
            return Ok(0);
        }

        // Writes are sequential, in response order; the first failure aborts
        // the batch and surfaces as the single error notice.
        for result in &response.results {
            self.writer.save_result(&query.text, result)?;
        }

        log::info!(
            "[SEARCH] Saved {} results for query '{}'",
            response.results.len(),
            query.text
        );
        Ok(response.results.len())
    }
}
