//! JSON output

use crate::directory::nearby::NearbyShop;
use crate::directory::OnlineMerchant;
use crate::error::Result;

/// Render a nearby-search result set as pretty-printed JSON
pub fn shops(results: &[NearbyShop]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

/// Render a merchant search result set as pretty-printed JSON
pub fn merchants(results: &[&OnlineMerchant]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::test_fixtures::shop;

    #[test]
    fn test_shops_json_round_trips() {
        let results = vec![NearbyShop {
            shop: shop("Crypto Cafe", 35.6812, 139.7671),
            distance_km: 0.82,
        }];

        let output = shops(&results).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["name"], "Crypto Cafe");
        assert_eq!(parsed[0]["distance_km"], 0.82);
    }

    #[test]
    fn test_empty_results_are_valid_json() {
        assert_eq!(shops(&[]).unwrap(), "[]");
        assert_eq!(merchants(&[]).unwrap(), "[]");
    }
}
