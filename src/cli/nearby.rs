//! Nearby command handler
//!
//! Fetches approved shops and shows the ones within the search radius,
//! sorted by distance.

use crate::config::Config;
use crate::constants::radius::{MAX_KM, MIN_KM};
use crate::directory::nearby::nearby_shops;
use crate::directory::search::shop_matches;
use crate::error::{Error, Result};
use crate::format::{render_shops, OutputFormat};
use crate::geo::locate::IpLocator;
use crate::geo::Coordinates;
use clap::Args;
use std::str::FromStr;
use tracing::warn;

/// Nearby command arguments
#[derive(Args)]
pub struct NearbyArgs {
    /// Latitude of the search origin
    #[arg(long, requires = "lng")]
    pub lat: Option<f64>,

    /// Longitude of the search origin
    #[arg(long, requires = "lat")]
    pub lng: Option<f64>,

    /// Resolve the search origin from this machine's IP address
    #[arg(long, conflicts_with_all = ["lat", "lng"])]
    pub here: bool,

    /// Search radius in kilometers (1-50)
    #[arg(long, short = 'r')]
    pub radius: Option<f64>,

    /// Keyword filter over name, address and tags
    #[arg(long, short = 'q')]
    pub query: Option<String>,

    /// Output format (text or json)
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,
}

/// Run the nearby command
pub async fn run(args: NearbyArgs) -> Result<()> {
    let config = Config::load()?;
    let store = super::require_store(&config)?;

    let radius = args.radius.unwrap_or(config.defaults.radius_km);
    if !(MIN_KM..=MAX_KM).contains(&radius) {
        return Err(Error::InvalidRadius(format!(
            "Radius {} km is out of range [{}, {}]",
            radius, MIN_KM, MAX_KM
        )));
    }

    let format_name = args.format.as_deref().unwrap_or(&config.defaults.format);
    let format = OutputFormat::from_str(format_name).map_err(Error::Config)?;

    let origin = resolve_origin(&args, &config).await;
    origin.validate()?;

    let shops = match store.fetch_shops().await {
        Ok(shops) => shops,
        Err(e) => {
            warn!(error = %e, "shop listing fetch failed");
            eprintln!("店舗情報の取得に失敗しました");
            std::process::exit(1);
        }
    };

    let shops: Vec<_> = match &args.query {
        Some(query) => shops
            .into_iter()
            .filter(|shop| shop_matches(shop, query))
            .collect(),
        None => shops,
    };

    let results = nearby_shops(&shops, origin, radius);
    let output = render_shops(&results, format)?;

    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        eprintln!("Output written to {}", path);
    } else {
        print!("{}", output);
    }

    Ok(())
}

/// Determine the search origin
///
/// Explicit coordinates win; `--here` (or the config default) uses IP
/// geolocation with the configured fallback; otherwise the fallback
/// coordinate is used directly.
async fn resolve_origin(args: &NearbyArgs, config: &Config) -> Coordinates {
    if let (Some(lat), Some(lng)) = (args.lat, args.lng) {
        return Coordinates::new(lat, lng);
    }

    if args.here || config.location.use_ip_location {
        let locator = IpLocator::new();
        return locator.locate_or_fallback(config.fallback_coords()).await;
    }

    config.fallback_coords()
}
