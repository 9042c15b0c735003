//! Human-readable text output

use crate::directory::nearby::NearbyShop;
use crate::directory::OnlineMerchant;

/// Render a nearby-search result set
pub fn shops(results: &[NearbyShop]) -> String {
    if results.is_empty() {
        return "No shops found within the search radius.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{} shops found:\n\n", results.len()));

    for (index, nearby) in results.iter().enumerate() {
        let shop = &nearby.shop;
        output.push_str(&format!(
            "{:2}. {} ({:.1} km)\n",
            index + 1,
            shop.name,
            nearby.distance_km
        ));
        output.push_str(&format!("    {}\n", shop.address));
        if let Some(networks) = &shop.jpyc_networks {
            output.push_str(&format!("    networks: {}\n", networks.join(", ")));
        }
        if let Some(methods) = &shop.payment_methods {
            output.push_str(&format!("    payment: {}\n", methods.join(", ")));
        }
        if let Some(url) = &shop.url {
            output.push_str(&format!("    {}\n", url));
        }
        output.push('\n');
    }

    output
}

/// Render a merchant search result set
pub fn merchants(results: &[&OnlineMerchant]) -> String {
    if results.is_empty() {
        return "No merchants matched.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{} merchants found:\n\n", results.len()));

    for (index, merchant) in results.iter().enumerate() {
        output.push_str(&format!("{:2}. {}", index + 1, merchant.name));
        if let Some(service_type) = &merchant.service_type {
            output.push_str(&format!(" [{}]", service_type));
        }
        output.push('\n');
        output.push_str(&format!("    {}\n", merchant.url));
        if let Some(description) = &merchant.description {
            output.push_str(&format!("    {}\n", description));
        }
        if let Some(tags) = &merchant.tags {
            output.push_str(&format!("    tags: {}\n", tags.join(", ")));
        }
        output.push('\n');
    }

    output
}
