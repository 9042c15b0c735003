//! Centralized constants for the jpyc-directory crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// Geographic constants
pub mod geo {
    /// Mean Earth radius in kilometers (WGS84 approximation)
    pub const EARTH_RADIUS_KM: f64 = 6371.0;

    /// Fallback latitude: Tokyo Station
    pub const FALLBACK_LAT: f64 = 35.6812;

    /// Fallback longitude: Tokyo Station
    pub const FALLBACK_LNG: f64 = 139.7671;
}

/// Nearby search radius bounds, in kilometers
pub mod radius {
    pub const MIN_KM: f64 = 1.0;
    pub const MAX_KM: f64 = 50.0;
    pub const DEFAULT_KM: f64 = 10.0;
}

/// External API endpoints
pub mod api {
    /// IP geolocation API (free, no key required)
    pub const IP_API_URL: &str = "http://ip-api.com/json";
}

/// Cache settings
pub mod cache {
    /// IP location cache duration in seconds (1 hour)
    pub const IP_LOCATION_TTL_SECS: u64 = 3600;

    /// IP location cache file name
    pub const IP_LOCATION_CACHE_FILE: &str = "ip_location_cache.json";
}

/// Canonical option lists offered by the registration forms
///
/// Values are stored verbatim in the backing store, so they stay in the
/// service's display language.
pub mod options {
    /// Column value the store uses for a non-canonical ("other") selection
    pub const OTHER: &str = "その他";

    /// Shop categories (a shop's category becomes its listing tag)
    pub const SHOP_CATEGORIES: &[&str] = &[
        "カフェ",
        "レストラン",
        "小売店",
        "美容・サロン",
        "宿泊",
        "サービス",
        OTHER,
    ];

    /// JPYC use cases for physical shops
    pub const SHOP_USE_CASES: &[&str] = &["店頭決済", "オンライン決済", "ポイント交換"];

    /// Networks JPYC is issued on
    pub const NETWORKS: &[&str] = &[
        "Ethereum",
        "Polygon",
        "Gnosis",
        "Avalanche",
        "Astar",
        "Shiden",
        OTHER,
    ];

    /// Payment methods a shop can accept (single-select)
    pub const PAYMENT_METHODS: &[&str] = &["QRコード決済", "レジ連携", "ウォレット送金"];

    /// Service types for online merchants
    pub const MERCHANT_SERVICE_TYPES: &[&str] = &[
        "EC・物販",
        "デジタルコンテンツ",
        "サブスクリプション",
        "寄付",
        OTHER,
    ];

    /// JPYC use cases for online merchants
    pub const MERCHANT_USE_CASES: &[&str] = &["商品決済", "投げ銭", "会費"];

    /// Platforms an online merchant operates on
    pub const PLATFORMS: &[&str] = &["Webサイト", "iOSアプリ", "Androidアプリ", OTHER];
}
