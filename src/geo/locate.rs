//! IP-based geolocation
//!
//! Uses ip-api.com to approximate the caller's position, with file-based
//! caching. The lookup is single-shot: one request per call, no retry.
//! Callers that must always end up with a coordinate use
//! [`IpLocator::locate_or_fallback`].

use crate::constants::api::IP_API_URL;
use crate::constants::cache::{IP_LOCATION_CACHE_FILE, IP_LOCATION_TTL_SECS};
use crate::error::{Error, Result};
use crate::geo::Coordinates;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;
use tracing::{info, warn};

/// A resolved IP location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpLocation {
    pub coords: Coordinates,
    /// Human-readable place name (city, region, country)
    pub label: String,
}

/// IP location service with caching
#[derive(Debug)]
pub struct IpLocator {
    client: reqwest::Client,
    base_url: String,
    cache_path: Option<PathBuf>,
}

/// ip-api.com response
#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    lat: Option<f64>,
    lon: Option<f64>,
    city: Option<String>,
    #[serde(rename = "regionName")]
    region_name: Option<String>,
    country: Option<String>,
}

/// Cached location data
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CachedLocation {
    location: IpLocation,
    timestamp: u64,
}

impl IpLocator {
    /// Create a new IP locator with the default cache path
    pub fn new() -> Self {
        let cache_path =
            dirs::cache_dir().map(|p| p.join("jpyc-directory").join(IP_LOCATION_CACHE_FILE));

        Self {
            client: reqwest::Client::new(),
            base_url: IP_API_URL.to_string(),
            cache_path,
        }
    }

    /// Create an IP locator with a specific cache path
    pub fn with_cache_path(cache_path: PathBuf) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: IP_API_URL.to_string(),
            cache_path: Some(cache_path),
        }
    }

    /// Create an IP locator without caching
    pub fn without_cache() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: IP_API_URL.to_string(),
            cache_path: None,
        }
    }

    /// Create an uncached IP locator against a custom endpoint (for tests)
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            cache_path: None,
        }
    }

    /// Get the current location based on the caller's IP address
    pub async fn locate(&self) -> Result<IpLocation> {
        // Check cache first
        if let Some(cached) = self.load_cache() {
            return Ok(cached);
        }

        let location = self.fetch_location().await?;

        self.save_cache(&location);

        Ok(location)
    }

    /// Get the current location, or `fallback` when the lookup fails
    ///
    /// Never fails; the underlying cause is logged for operators.
    pub async fn locate_or_fallback(&self, fallback: Coordinates) -> Coordinates {
        match self.locate().await {
            Ok(location) => {
                info!(label = %location.label, "resolved location from IP");
                location.coords
            }
            Err(e) => {
                warn!(error = %e, "IP geolocation unavailable, using fallback");
                fallback
            }
        }
    }

    /// Fetch location from ip-api.com
    async fn fetch_location(&self) -> Result<IpLocation> {
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| Error::Geo(format!("IP location request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Geo(format!(
                "IP location API returned status: {}",
                response.status()
            )));
        }

        let data: IpApiResponse = response
            .json()
            .await
            .map_err(|e| Error::Geo(format!("Failed to parse IP location response: {}", e)))?;

        if data.status != "success" {
            return Err(Error::Geo("IP location lookup failed".to_string()));
        }

        let lat = data
            .lat
            .ok_or_else(|| Error::Geo("No latitude in response".to_string()))?;
        let lng = data
            .lon
            .ok_or_else(|| Error::Geo("No longitude in response".to_string()))?;

        // Build label from available fields
        let label = [data.city, data.region_name, data.country]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ");

        Ok(IpLocation {
            coords: Coordinates::new(lat, lng),
            label: if label.is_empty() {
                "Unknown Location".to_string()
            } else {
                label
            },
        })
    }

    /// Load cached location if still valid
    fn load_cache(&self) -> Option<IpLocation> {
        let cache_path = self.cache_path.as_ref()?;

        if !cache_path.exists() {
            return None;
        }

        let content = fs::read_to_string(cache_path).ok()?;
        let cached: CachedLocation = serde_json::from_str(&content).ok()?;

        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .ok()?
            .as_secs();

        if now - cached.timestamp < IP_LOCATION_TTL_SECS {
            Some(cached.location)
        } else {
            None
        }
    }

    /// Save location to cache
    fn save_cache(&self, location: &IpLocation) {
        let Some(cache_path) = &self.cache_path else {
            return;
        };

        if let Some(parent) = cache_path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        let timestamp = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        let cached = CachedLocation {
            location: location.clone(),
            timestamp,
        };

        if let Ok(content) = serde_json::to_string_pretty(&cached) {
            let _ = fs::write(cache_path, content);
        }
    }

    /// Clear the cache
    pub fn clear_cache(&self) {
        if let Some(cache_path) = &self.cache_path {
            let _ = fs::remove_file(cache_path);
        }
    }
}

impl Default for IpLocator {
    fn default() -> Self {
        Self::new()
    }
}
