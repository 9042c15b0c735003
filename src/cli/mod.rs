//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod nearby;
pub mod register;
pub mod search;
pub mod status;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::store::StoreClient;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Directory of shops and online merchants that accept JPYC
#[derive(Parser)]
#[command(name = "jpyc-directory")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find shops near a location
    Nearby(nearby::NearbyArgs),

    /// Search online merchants
    Search(search::SearchArgs),

    /// Submit a new listing for review
    #[command(subcommand)]
    Register(register::RegisterCommand),

    /// Manage configuration
    Config(config::ConfigArgs),

    /// Show store connectivity and sign-in state
    Status(status::StatusArgs),
}

/// Run the CLI
pub async fn run() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Nearby(args) => nearby::run(args).await,
        Commands::Search(args) => search::run(args).await,
        Commands::Register(command) => register::run(command).await,
        Commands::Config(args) => config::run(args),
        Commands::Status(args) => status::run(args).await,
    }
}

/// Initialize logging to stderr, so stdout stays clean for results
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Build a store client, failing when the store is unconfigured
pub(crate) fn require_store(config: &Config) -> Result<StoreClient> {
    let Some(store_config) = config.store() else {
        return Err(Error::Config(
            "store is not configured; set store.url and store.api_key first".to_string(),
        ));
    };
    StoreClient::new(&store_config)
}
