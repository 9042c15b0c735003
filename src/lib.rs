//! jpyc-directory: JPYC Merchant Directory Client
//!
//! A library and CLI tool for browsing physical shops and online merchants
//! that accept JPYC, and for submitting new listings for review.
//!
//! ## Features
//!
//! - Radius-based nearby search over shop listings (haversine)
//! - Keyword and category filtering over online merchants
//! - Three-step registration wizard with per-step validation
//! - Client for the hosted listing store (read approved, insert pending)
//! - IP geolocation with a fixed Tokyo Station fallback
//!
//! ## Quick Start
//!
//! ```rust
//! use jpyc_directory::directory::nearby::nearby_shops;
//! use jpyc_directory::geo::{haversine_km, Coordinates};
//!
//! let tokyo_station = Coordinates::fallback();
//! let shinjuku = Coordinates::new(35.6895, 139.6917);
//!
//! // Distance between two points, in kilometers
//! let distance = haversine_km(tokyo_station, shinjuku);
//! assert!(distance > 6.0 && distance < 8.0);
//!
//! // Nearby search is a pure function over a listing snapshot
//! let results = nearby_shops(&[], tokyo_station, 10.0);
//! assert!(results.is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod directory;
pub mod error;
pub mod format;
pub mod geo;
pub mod store;
pub mod wizard;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use geo::Coordinates;
pub use wizard::{Wizard, WizardState};
