//! Search command handler
//!
//! Keyword and category search over approved online merchants.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::{render_merchants, OutputFormat};
use crate::directory::search::{search_merchants, service_types};
use clap::Args;
use std::str::FromStr;
use tracing::warn;

/// Search command arguments
#[derive(Args)]
pub struct SearchArgs {
    /// Free-text query over name, description and tags
    #[arg(long, short = 'q', default_value = "")]
    pub query: String,

    /// Exact service-type filter (omit for all categories)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// List the categories present in the directory and exit
    #[arg(long)]
    pub list_categories: bool,

    /// Output format (text or json)
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,
}

/// Run the search command
pub async fn run(args: SearchArgs) -> Result<()> {
    let config = Config::load()?;
    let store = super::require_store(&config)?;

    let format_name = args.format.as_deref().unwrap_or(&config.defaults.format);
    let format = OutputFormat::from_str(format_name).map_err(Error::Config)?;

    let merchants = match store.fetch_merchants().await {
        Ok(merchants) => merchants,
        Err(e) => {
            warn!(error = %e, "merchant listing fetch failed");
            eprintln!("サービス情報の取得に失敗しました");
            std::process::exit(1);
        }
    };

    if args.list_categories {
        for category in service_types(&merchants) {
            println!("{}", category);
        }
        return Ok(());
    }

    let results = search_merchants(&merchants, &args.query, args.category.as_deref());
    let output = render_merchants(&results, format)?;

    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        eprintln!("Output written to {}", path);
    } else {
        print!("{}", output);
    }

    Ok(())
}
