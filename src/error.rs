//! Error types for jpyc-directory

use thiserror::Error;

/// Main error type for jpyc-directory operations
///
/// Wizard validation failures are not represented here: they are plain
/// user-facing messages held in the wizard's error slot and never
/// propagate past it.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store error: {0}")]
    Store(String),

    #[error("Geolocation error: {0}")]
    Geo(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid radius: {0}")]
    InvalidRadius(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for jpyc-directory operations
pub type Result<T> = std::result::Result<T, Error>;
