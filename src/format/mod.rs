//! Output formatting for listing results

pub mod json;
pub mod text;

use crate::directory::nearby::NearbyShop;
use crate::directory::OnlineMerchant;
use crate::error::Result;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {} (expected text or json)", s)),
        }
    }
}

/// Format a nearby-search result set
pub fn render_shops(results: &[NearbyShop], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::shops(results)),
        OutputFormat::Json => json::shops(results),
    }
}

/// Format a merchant search result set
pub fn render_merchants(results: &[&OnlineMerchant], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::merchants(results)),
        OutputFormat::Json => json::merchants(results),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("gpx").is_err());
    }
}
