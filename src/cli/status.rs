//! Status command handler
//!
//! Shows configuration state and store reachability.

use crate::config::Config;
use crate::error::Result;
use crate::store::{MERCHANTS_TABLE, SHOPS_TABLE};
use clap::Args;

/// Status command arguments
#[derive(Args)]
pub struct StatusArgs {
    /// Skip the store reachability probe
    #[arg(long)]
    pub no_probe: bool,
}

/// Run the status command
pub async fn run(args: StatusArgs) -> Result<()> {
    let config = Config::load()?;

    println!("jpyc-directory v{}", env!("CARGO_PKG_VERSION"));
    println!();

    match config.identity() {
        Some(identity) => println!("Identity: {} (signed in)", identity.0),
        None => println!("Identity: signed out"),
    }

    let Some(store_config) = config.store() else {
        println!("Store: NOT CONFIGURED");
        println!("  Set store.url and store.api_key via `jpyc-directory config`");
        return Ok(());
    };
    println!("Store: {}", store_config.url);

    if args.no_probe {
        return Ok(());
    }

    let store = super::require_store(&config)?;
    match (
        store.count_approved(SHOPS_TABLE).await,
        store.count_approved(MERCHANTS_TABLE).await,
    ) {
        (Ok(shops), Ok(merchants)) => {
            println!("  REACHABLE: {} shops, {} merchants approved", shops, merchants);
        }
        (Err(e), _) | (_, Err(e)) => {
            println!("  UNREACHABLE: {}", e);
        }
    }

    Ok(())
}
