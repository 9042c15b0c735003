//! Nearby search over shop listings
//!
//! A pure derived view: annotate, filter by radius, sort by distance.
//! Recomputed from the raw listing snapshot on every call; nothing here
//! caches state.

use crate::directory::Shop;
use crate::geo::{haversine_km, Coordinates};
use serde::Serialize;

/// A shop annotated with its distance from the search origin
#[derive(Debug, Clone, Serialize)]
pub struct NearbyShop {
    #[serde(flatten)]
    pub shop: Shop,
    pub distance_km: f64,
}

/// Find shops within `radius_km` of `origin`, sorted by distance
///
/// The sort is ascending and stable: shops at equal distance keep their
/// input order.
pub fn nearby_shops(shops: &[Shop], origin: Coordinates, radius_km: f64) -> Vec<NearbyShop> {
    let mut results: Vec<NearbyShop> = shops
        .iter()
        .map(|shop| NearbyShop {
            shop: shop.clone(),
            distance_km: haversine_km(origin, shop.coords()),
        })
        .filter(|nearby| nearby.distance_km <= radius_km)
        .collect();

    // sort_by is stable, so equidistant shops preserve input order
    results.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    results
}
