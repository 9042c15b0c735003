//! External store client
//!
//! Talks to the hosted PostgREST-style backend that owns all persistence
//! and moderation. This crate only ever reads approved rows and inserts
//! pending ones; approval happens in an external administrative process.

use crate::directory::{OnlineMerchant, Shop};
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Table holding physical shop listings
pub const SHOPS_TABLE: &str = "shops";

/// Table holding online-merchant listings
pub const MERCHANTS_TABLE: &str = "online_merchants";

const USER_AGENT: &str = "jpyc-directory/0.1.0";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the external store
///
/// Obtained from [`crate::config::Config::store`]; its absence there is the
/// typed "unconfigured" state, so a constructed client always has a URL
/// and key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub url: String,
    pub api_key: String,
}

/// Client for the external listing store
pub struct StoreClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl StoreClient {
    /// Create a client from connection settings
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Store(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Fetch all approved shop listings
    ///
    /// Zero rows is an empty Vec, not an error.
    pub async fn fetch_shops(&self) -> Result<Vec<Shop>> {
        self.fetch_approved(SHOPS_TABLE).await
    }

    /// Fetch all approved online-merchant listings
    pub async fn fetch_merchants(&self) -> Result<Vec<OnlineMerchant>> {
        self.fetch_approved(MERCHANTS_TABLE).await
    }

    async fn fetch_approved<T: DeserializeOwned>(&self, table: &str) -> Result<Vec<T>> {
        let url = format!("{}?select=*&status=eq.approved", self.table_url(table));
        debug!(table, "fetching approved listings");

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| Error::Store(format!("fetch from {} failed: {}", table, e)))?;

        if !response.status().is_success() {
            return Err(Error::Store(format!(
                "store returned status {} for {}",
                response.status(),
                table
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::Store(format!("failed to decode {} rows: {}", table, e)))
    }

    /// Insert a single row into `table`
    ///
    /// Exactly one insert per successful submission; the created row is
    /// not read back (it only becomes visible after external approval).
    pub async fn insert<T: Serialize + ?Sized>(&self, table: &str, row: &T) -> Result<()> {
        debug!(table, "inserting listing");

        let response = self
            .client
            .post(self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await
            .map_err(|e| Error::Store(format!("insert into {} failed: {}", table, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Store(format!(
                "insert into {} rejected: {} {}",
                table, status, body
            )));
        }

        Ok(())
    }

    /// Count approved rows in `table` (connectivity probe)
    pub async fn count_approved(&self, table: &str) -> Result<usize> {
        let rows: Vec<serde_json::Value> = {
            let url = format!("{}?select=id&status=eq.approved", self.table_url(table));
            let response = self
                .client
                .get(&url)
                .header("apikey", &self.api_key)
                .bearer_auth(&self.api_key)
                .send()
                .await
                .map_err(|e| Error::Store(format!("count for {} failed: {}", table, e)))?;

            if !response.status().is_success() {
                return Err(Error::Store(format!(
                    "store returned status {} for {}",
                    response.status(),
                    table
                )));
            }

            response
                .json()
                .await
                .map_err(|e| Error::Store(format!("failed to decode {} rows: {}", table, e)))?
        };

        Ok(rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{ListingStatus, NewShop};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> StoreClient {
        StoreClient::new(&StoreConfig {
            url: server.uri(),
            api_key: "test-key".to_string(),
        })
        .unwrap()
    }

    fn shop_row(name: &str) -> serde_json::Value {
        json!({
            "id": "5f0c6b4a-9b1e-4c3f-8f2a-7d1e2b3c4d5e",
            "name": name,
            "address": "東京都千代田区丸の内1-9-1",
            "lat": 35.6812,
            "lng": 139.7671,
            "status": "approved",
            "upvotes": 0,
            "downvotes": 0,
            "created_at": "2024-05-01T09:00:00+00:00",
            "updated_at": "2024-05-01T09:00:00+00:00"
        })
    }

    fn pending_shop(name: &str) -> NewShop {
        NewShop {
            name: name.to_string(),
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
        }
    }

    #[tokio::test]
    async fn test_fetch_shops_filters_on_approved() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/shops"))
            .and(query_param("status", "eq.approved"))
            .and(header("apikey", "test-key"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([shop_row("Crypto Cafe"), shop_row("Ramen JPYC")])),
            )
            .mount(&server)
            .await;

        let shops = test_client(&server).fetch_shops().await.unwrap();
        assert_eq!(shops.len(), 2);
        assert_eq!(shops[0].name, "Crypto Cafe");
        assert_eq!(shops[0].status, ListingStatus::Approved);
    }

    #[tokio::test]
    async fn test_fetch_shops_tolerates_zero_rows() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/shops"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let shops = test_client(&server).fetch_shops().await.unwrap();
        assert!(shops.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_surfaces_transport_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/shops"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = test_client(&server).fetch_shops().await;
        assert!(matches!(result, Err(Error::Store(_))));
    }

    #[tokio::test]
    async fn test_insert_posts_pending_row() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/v1/shops"))
            .and(header("apikey", "test-key"))
            .and(header("Prefer", "return=minimal"))
            .and(body_partial_json(json!({
                "name": "Crypto Cafe",
                "status": "pending",
                "upvotes": 0,
                "downvotes": 0,
                "created_by": "user-123"
            })))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let result = test_client(&server)
            .insert(SHOPS_TABLE, &pending_shop("Crypto Cafe"))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_insert_surfaces_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/v1/shops"))
            .respond_with(ResponseTemplate::new(401).set_body_string("permission denied"))
            .mount(&server)
            .await;

        let result = test_client(&server)
            .insert(SHOPS_TABLE, &pending_shop("Crypto Cafe"))
            .await;
        let err = result.unwrap_err();
        assert!(err.to_string().contains("401"));
    }

    #[tokio::test]
    async fn test_count_approved() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/online_merchants"))
            .and(query_param("select", "id"))
            .and(query_param("status", "eq.approved"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"id": "a"}, {"id": "b"}, {"id": "c"}])),
            )
            .mount(&server)
            .await;

        let count = test_client(&server)
            .count_approved(MERCHANTS_TABLE)
            .await
            .unwrap();
        assert_eq!(count, 3);
    }
}
