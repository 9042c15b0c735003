//! Listing model for the directory
//!
//! This module handles:
//! - Shop and online-merchant listing types as read from the store
//! - Insert-row shapes produced by the registration wizard
//! - Nearby search and keyword/category filtering

pub mod nearby;
pub mod search;

use crate::geo::Coordinates;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Moderation status of a listing
///
/// Only approved listings are ever shown to end users; pending and
/// rejected rows exist for the external review process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Approved => write!(f, "approved"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

/// A physical shop that accepts JPYC
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jpyc_networks: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jpyc_use_cases: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub status: ListingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default)]
    pub upvotes: u32,
    #[serde(default)]
    pub downvotes: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Shop {
    /// The shop's position as a coordinate pair
    pub fn coords(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }
}

/// An online merchant that accepts JPYC
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnlineMerchant {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jpyc_use_case: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub status: ListingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert row for a new shop listing
///
/// The store assigns id and timestamps. Submissions always enter review
/// as pending with zeroed vote counters; absent optional columns are
/// omitted from the payload rather than sent empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewShop {
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jpyc_networks: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jpyc_use_cases: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub status: ListingStatus,
    pub created_by: String,
    pub upvotes: u32,
    pub downvotes: u32,
}

/// Insert row for a new online-merchant listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewMerchant {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jpyc_use_case: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub status: ListingStatus,
    pub created_by: String,
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::*;

    /// A minimal approved shop at the given position
    pub fn shop(name: &str, lat: f64, lng: f64) -> Shop {
        Shop {
            id: Uuid::nil(),
            name: name.to_string(),
            address: "東京都千代田区丸の内1-9-1".to_string(),
            lat,
            lng,
            jpyc_networks: Some(vec!["Polygon".to_string()]),
            payment_methods: Some(vec!["QRコード決済".to_string()]),
            jpyc_use_cases: None,
            url: None,
            tags: Some(vec!["カフェ".to_string()]),
            status: ListingStatus::Approved,
            created_by: None,
            upvotes: 0,
            downvotes: 0,
            created_at: "2024-05-01T09:00:00Z".parse().unwrap(),
            updated_at: "2024-05-01T09:00:00Z".parse().unwrap(),
        }
    }

    /// A minimal approved merchant
    pub fn merchant(name: &str, service_type: Option<&str>) -> OnlineMerchant {
        OnlineMerchant {
            id: Uuid::nil(),
            name: name.to_string(),
            description: None,
            service_type: service_type.map(str::to_string),
            url: format!("https://{}.example.com", name.to_lowercase().replace(' ', "-")),
            platforms: None,
            jpyc_use_case: None,
            country: None,
            tags: None,
            status: ListingStatus::Approved,
            created_by: None,
            created_at: "2024-05-01T09:00:00Z".parse().unwrap(),
            updated_at: "2024-05-01T09:00:00Z".parse().unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ListingStatus::Pending).unwrap(),
            "\"pending\""
        );
        let parsed: ListingStatus = serde_json::from_str("\"approved\"").unwrap();
        assert_eq!(parsed, ListingStatus::Approved);
    }

    #[test]
    fn test_shop_deserializes_from_store_row() {
        let row = json!({
            "id": "5f0c6b4a-9b1e-4c3f-8f2a-7d1e2b3c4d5e",
            "name": "Crypto Cafe",
            "address": "東京都千代田区丸の内1-9-1",
            "lat": 35.6812,
            "lng": 139.7671,
            "jpyc_networks": ["Polygon"],
            "payment_methods": ["QRコード決済"],
            "tags": ["カフェ"],
            "status": "approved",
            "created_by": "user-123",
            "upvotes": 3,
            "downvotes": 0,
            "created_at": "2024-05-01T09:00:00+00:00",
            "updated_at": "2024-06-12T15:30:00+00:00"
        });

        let shop: Shop = serde_json::from_value(row).unwrap();
        assert_eq!(shop.name, "Crypto Cafe");
        assert_eq!(shop.status, ListingStatus::Approved);
        assert_eq!(shop.upvotes, 3);
        assert_eq!(shop.jpyc_use_cases, None);
        assert_eq!(shop.coords().lat, 35.6812);
    }

    #[test]
    fn test_new_shop_omits_absent_columns() {
        let row = NewShop {
            name: "Crypto Cafe".to_string(),
            address: "東京都千代田区".to_string(),
            lat: 35.6812,
            lng: 139.7671,
            jpyc_networks: Some(vec!["Polygon".to_string()]),
            payment_methods: Some(vec!["QRコード決済".to_string()]),
            jpyc_use_cases: None,
            url: None,
            tags: Some(vec!["カフェ".to_string()]),
            status: ListingStatus::Pending,
            created_by: "user-123".to_string(),
            upvotes: 0,
            downvotes: 0,
        };

        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["status"], "pending");
        assert_eq!(value["upvotes"], 0);
        assert!(value.get("url").is_none());
        assert!(value.get("jpyc_use_cases").is_none());
    }
}
