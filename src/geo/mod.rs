//! Geographic primitives
//!
//! This module handles:
//! - The coordinate type shared by listings and the nearby search
//! - Great-circle distance (haversine)
//! - IP-based geolocation with a fixed fallback

pub mod locate;

use crate::constants::geo::{EARTH_RADIUS_KM, FALLBACK_LAT, FALLBACK_LNG};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A geographic coordinate (latitude, longitude), WGS84 decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// The fixed fallback coordinate: Tokyo Station
    pub fn fallback() -> Self {
        Self::new(FALLBACK_LAT, FALLBACK_LNG)
    }

    /// Validate that coordinates are within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.lat < -90.0 || self.lat > 90.0 {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if self.lng < -180.0 || self.lng > 180.0 {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }
}

/// Calculate the great-circle distance between two coordinates in
/// kilometers (haversine formula)
///
/// Deterministic and symmetric: `haversine_km(a, b) == haversine_km(b, a)`,
/// and `haversine_km(a, a) == 0` within floating-point tolerance.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat1 = a.lat * PI / 180.0;
    let lat2 = b.lat * PI / 180.0;
    let delta_lat = (b.lat - a.lat) * PI / 180.0;
    let delta_lng = (b.lng - a.lng) * PI / 180.0;

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}
