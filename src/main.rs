//! Terminal input collector: gathers the query, optional date range, and
//! result count, then hands them to the search orchestrator and prints the
//! transient notices it emits.

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use exa_notes::config::{defaults, env_vars, Settings};
use exa_notes::{
    DiskVault, ExaClient, Notifier, NoteWriter, SearchOrchestrator, SearchOutcome, SearchQuery,
};

#[derive(Parser, Debug)]
#[command(name = "exa-notes", about = "Search the web with Exa and save each result as a markdown note")]
struct Cli {
    /// Search keyword
    query: String,

    /// Only include results published on or after this date (YYYY-MM-DD)
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Only include results published on or before this date (YYYY-MM-DD)
    #[arg(long)]
    end_date: Option<NaiveDate>,

    /// Number of results to fetch (1-100)
    #[arg(long, default_value_t = defaults::NUM_RESULTS, value_parser = clap::value_parser!(u32).range(1..=100))]
    num_results: u32,

    /// Path to the settings blob
    #[arg(long, env = env_vars::SETTINGS_PATH, default_value = defaults::SETTINGS_FILE)]
    settings: PathBuf,

    /// API key to use for this search; persisted to the settings blob
    #[arg(long)]
    api_key: Option<String>,

    /// Root folder for saved notes; persisted to the settings blob
    #[arg(long)]
    root_folder: Option<String>,
}

/// Prints notices to the terminal
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notice(&self, message: &str) {
        println!("{}", message);
    }
}

/// Midnight-UTC ISO-8601 rendering of a date argument, matching the wire
/// format the provider expects for published-date bounds.
fn to_iso_date(date: NaiveDate) -> String {
    format!("{}T00:00:00.000Z", date.format("%Y-%m-%d"))
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    let mut settings = Settings::load(&cli.settings).apply_env_overrides();

    // Flag-provided settings are persisted on change, like the settings UI
    if cli.api_key.is_some() || cli.root_folder.is_some() {
        if let Some(key) = cli.api_key {
            settings.api_key = key;
        }
        if let Some(root) = cli.root_folder {
            settings.root_folder = root;
        }
        if let Err(e) = settings.save(&cli.settings) {
            log::warn!("[SETTINGS] Failed to persist {:?}: {}", cli.settings, e);
        }
    }

    if settings.api_key.is_empty() {
        log::warn!(
            "[SETTINGS] No API key configured; set {} or add apiKey to {:?}",
            env_vars::API_KEY,
            cli.settings
        );
    }

    let query = SearchQuery::new(
        cli.query,
        cli.start_date.map(to_iso_date),
        cli.end_date.map(to_iso_date),
        cli.num_results,
    );

    let provider = Arc::new(ExaClient::new(&settings.api_key));
    let writer = NoteWriter::new(Arc::new(DiskVault), &settings.root_folder);
    let orchestrator = SearchOrchestrator::new(provider, writer, Arc::new(TerminalNotifier));

    let outcome = orchestrator.run(&query).await;
    if matches!(outcome, SearchOutcome::Rejected | SearchOutcome::Failed(_)) {
        std::process::exit(1);
    }
}
