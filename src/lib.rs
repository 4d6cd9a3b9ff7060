//! exa-notes — keyword web search persisted as markdown notes.
//!
//! Pipeline: build an Exa search request from user input, decode the JSON
//! response into typed results, and write one front-matter-headed markdown
//! note per result under `{root}/{keyword}/`. The provider and filesystem
//! edges sit behind traits so hosts and tests can supply their own.

pub mod config;
pub mod error;
pub mod models;
pub mod notes;
pub mod orchestrator;
pub mod provider;

pub use config::Settings;
pub use error::SearchError;
pub use models::{SearchQuery, SearchResponse, SearchResult};
pub use notes::{DiskVault, NoteWriter, Vault};
pub use orchestrator::{Notifier, SearchOrchestrator, SearchOutcome};
pub use provider::{ExaClient, SearchProvider};
