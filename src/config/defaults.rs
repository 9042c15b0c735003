//! Default configuration values
//!
//! Named constants for all tunable parameters

use crate::constants::radius;

/// Default nearby-search radius in kilometers
pub const DEFAULT_RADIUS_KM: f64 = radius::DEFAULT_KM;

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Resolve the search origin from the IP address by default
pub const DEFAULT_USE_IP_LOCATION: bool = false;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "jpyc-directory";
