//! Shop registration form
//!
//! Step 1 collects identity (name, address, category, position), step 2
//! the payment details. The category becomes the listing's single tag at
//! submit time.

use crate::constants::geo::{FALLBACK_LAT, FALLBACK_LNG};
use crate::directory::{ListingStatus, NewShop};
use crate::store::SHOPS_TABLE;
use crate::wizard::{none_if_blank, none_if_empty, resolve_all, Choice, RegistrationForm, UserId};

const MSG_NAME_REQUIRED: &str = "店舗名を入力してください";
const MSG_ADDRESS_REQUIRED: &str = "住所を入力してください";
const MSG_CATEGORY_REQUIRED: &str = "カテゴリを選択してください";
const MSG_USE_CASE_REQUIRED: &str = "JPYCの利用方法を選択してください";
const MSG_NETWORK_REQUIRED: &str = "対応ネットワークを選択してください";
const MSG_PAYMENT_REQUIRED: &str = "決済方法を選択してください";

/// Draft state for registering a physical shop
#[derive(Debug, Clone, PartialEq)]
pub struct ShopForm {
    pub name: String,
    pub address: String,
    pub category: Option<String>,
    pub lat: f64,
    pub lng: f64,
    pub jpyc_use_cases: Vec<Choice>,
    pub networks: Vec<Choice>,
    /// Single-select, wrapped into a one-element list at submit time
    pub payment_method: Option<String>,
    pub url: String,
}

impl Default for ShopForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            address: String::new(),
            category: None,
            // Position fields start at the fallback coordinate
            lat: FALLBACK_LAT,
            lng: FALLBACK_LNG,
            jpyc_use_cases: Vec::new(),
            networks: Vec::new(),
            payment_method: None,
            url: String::new(),
        }
    }
}

impl RegistrationForm for ShopForm {
    type Row = NewShop;

    fn table(&self) -> &'static str {
        SHOPS_TABLE
    }

    fn validate_basic(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some(MSG_NAME_REQUIRED.to_string());
        }
        if self.address.trim().is_empty() {
            return Some(MSG_ADDRESS_REQUIRED.to_string());
        }
        if self.category.as_deref().unwrap_or("").trim().is_empty() {
            return Some(MSG_CATEGORY_REQUIRED.to_string());
        }
        None
    }

    fn validate_domain(&self) -> Option<String> {
        if resolve_all(&self.jpyc_use_cases).is_empty() {
            return Some(MSG_USE_CASE_REQUIRED.to_string());
        }
        if resolve_all(&self.networks).is_empty() {
            return Some(MSG_NETWORK_REQUIRED.to_string());
        }
        if self.payment_method.as_deref().unwrap_or("").trim().is_empty() {
            return Some(MSG_PAYMENT_REQUIRED.to_string());
        }
        None
    }

    fn to_row(&self, created_by: &UserId) -> NewShop {
        NewShop {
            name: self.name.clone(),
            address: self.address.clone(),
            lat: self.lat,
            lng: self.lng,
            jpyc_networks: none_if_empty(resolve_all(&self.networks)),
            payment_methods: self.payment_method.clone().map(|method| vec![method]),
            jpyc_use_cases: none_if_empty(resolve_all(&self.jpyc_use_cases)),
            url: none_if_blank(&self.url),
            tags: self.category.clone().map(|category| vec![category]),
            status: ListingStatus::Pending,
            created_by: created_by.0.clone(),
            upvotes: 0,
            downvotes: 0,
        }
    }
}
