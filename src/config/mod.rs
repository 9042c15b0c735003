//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/jpyc-directory/config.toml

pub mod defaults;

use crate::constants::geo::{FALLBACK_LAT, FALLBACK_LNG};
use crate::error::{Error, Result};
use crate::geo::Coordinates;
use crate::store::StoreConfig;
use crate::wizard::UserId;
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// External store connection
    #[serde(default)]
    pub store: StoreSection,

    /// Signed-in identity
    #[serde(default)]
    pub auth: AuthSection,

    /// Default values for browsing
    #[serde(default)]
    pub defaults: DefaultsSection,

    /// Search origin settings
    #[serde(default)]
    pub location: LocationSection,
}

/// External store connection settings
///
/// Both fields empty means the store is unconfigured; see [`Config::store`].
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreSection {
    /// Store base URL
    #[serde(default)]
    pub url: String,

    /// Store API key
    #[serde(default)]
    pub api_key: String,
}

/// Signed-in identity
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthSection {
    /// Externally-issued user identity; empty when signed out
    #[serde(default)]
    pub user_id: String,
}

/// Default values for browsing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsSection {
    /// Nearby-search radius in kilometers
    #[serde(default = "default_radius_km")]
    pub radius_km: f64,

    /// Output format
    #[serde(default = "default_format")]
    pub format: String,
}

/// Search origin settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationSection {
    /// Fallback latitude when geolocation is unavailable
    #[serde(default = "default_lat")]
    pub lat: f64,

    /// Fallback longitude when geolocation is unavailable
    #[serde(default = "default_lng")]
    pub lng: f64,

    /// If true, resolve the origin from the IP address when no
    /// coordinates are given
    #[serde(default = "default_use_ip_location")]
    pub use_ip_location: bool,
}

// Default value functions for serde
fn default_radius_km() -> f64 {
    DEFAULT_RADIUS_KM
}
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}
fn default_lat() -> f64 {
    FALLBACK_LAT
}
fn default_lng() -> f64 {
    FALLBACK_LNG
}
fn default_use_ip_location() -> bool {
    DEFAULT_USE_IP_LOCATION
}

impl Default for DefaultsSection {
    fn default() -> Self {
        Self {
            radius_km: default_radius_km(),
            format: default_format(),
        }
    }
}

impl Default for LocationSection {
    fn default() -> Self {
        Self {
            lat: default_lat(),
            lng: default_lng(),
            use_ip_location: default_use_ip_location(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// The store connection, or `None` while unconfigured
    ///
    /// Callers branch on presence explicitly; there is no partially
    /// configured state.
    pub fn store(&self) -> Option<StoreConfig> {
        if self.store.url.trim().is_empty() || self.store.api_key.trim().is_empty() {
            return None;
        }
        Some(StoreConfig {
            url: self.store.url.clone(),
            api_key: self.store.api_key.clone(),
        })
    }

    /// The signed-in identity, or `None` when signed out
    pub fn identity(&self) -> Option<UserId> {
        let user_id = self.auth.user_id.trim();
        (!user_id.is_empty()).then(|| UserId(user_id.to_string()))
    }

    /// The configured fallback search origin
    pub fn fallback_coords(&self) -> Coordinates {
        Coordinates::new(self.location.lat, self.location.lng)
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["store", "url"] => Some(self.store.url.clone()),
            ["store", "api_key"] => Some(self.store.api_key.clone()),

            ["auth", "user_id"] => Some(self.auth.user_id.clone()),

            ["defaults", "radius_km"] => Some(self.defaults.radius_km.to_string()),
            ["defaults", "format"] => Some(self.defaults.format.clone()),

            ["location", "lat"] => Some(self.location.lat.to_string()),
            ["location", "lng"] => Some(self.location.lng.to_string()),
            ["location", "use_ip_location"] => Some(self.location.use_ip_location.to_string()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["store", "url"] => {
                self.store.url = value.to_string();
            }
            ["store", "api_key"] => {
                self.store.api_key = value.to_string();
            }

            ["auth", "user_id"] => {
                self.auth.user_id = value.to_string();
            }

            ["defaults", "radius_km"] => {
                self.defaults.radius_km = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid radius value: {}", value)))?;
            }
            ["defaults", "format"] => {
                self.defaults.format = value.to_string();
            }

            ["location", "lat"] => {
                self.location.lat = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid latitude value: {}", value)))?;
            }
            ["location", "lng"] => {
                self.location.lng = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid longitude value: {}", value)))?;
            }
            ["location", "use_ip_location"] => {
                self.location.use_ip_location = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid boolean value: {}", value)))?;
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "store.url",
            "store.api_key",
            "auth.user_id",
            "defaults.radius_km",
            "defaults.format",
            "location.lat",
            "location.lng",
            "location.use_ip_location",
        ]
    }
}
