//! Config command handler
//!
//! View and modify configuration settings.

use crate::config::Config;
use crate::error::Result;
use clap::Args;

/// Config command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration key (e.g., "store.url")
    pub key: Option<String>,

    /// Value to set (if not provided, shows current value)
    pub value: Option<String>,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// Reset config to defaults
    #[arg(long)]
    pub reset: bool,
}

/// Run the config command
pub fn run(args: ConfigArgs) -> Result<()> {
    // Show path
    if args.path {
        let path = Config::config_path()?;
        println!("{}", path.display());
        return Ok(());
    }

    // Reset config
    if args.reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load()?;

    match (&args.key, &args.value) {
        // No arguments: show all config
        (None, None) => {
            show_all_config(&config);
        }

        // Key only: show that value
        (Some(key), None) => {
            if let Some(value) = config.get(key) {
                println!("{}", value);
            } else {
                eprintln!("Unknown config key: {}", key);
                eprintln!("\nAvailable keys:");
                for k in Config::available_keys() {
                    eprintln!("  {}", k);
                }
                std::process::exit(1);
            }
        }

        // Key and value: set the value
        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save()?;
            println!("{} = {}", key, value);
        }

        // Value without key: not valid
        (None, Some(_)) => {
            eprintln!("Error: Must specify a key to set a value");
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Display all configuration values
fn show_all_config(config: &Config) {
    println!("[store]");
    println!("url = \"{}\"", config.store.url);
    if config.store.api_key.is_empty() {
        println!("api_key = \"\" # not configured");
    } else {
        println!("api_key = \"***\" # configured");
    }
    println!();

    println!("[auth]");
    if config.auth.user_id.is_empty() {
        println!("user_id = \"\" # signed out");
    } else {
        println!("user_id = \"{}\"", config.auth.user_id);
    }
    println!();

    println!("[defaults]");
    println!("radius_km = {}", config.defaults.radius_km);
    println!("format = \"{}\"", config.defaults.format);
    println!();

    println!("[location]");
    println!("lat = {}", config.location.lat);
    println!("lng = {}", config.location.lng);
    println!("use_ip_location = {}", config.location.use_ip_location);
}
