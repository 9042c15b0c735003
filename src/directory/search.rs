//! Keyword and category filtering
//!
//! Pure functions over listing snapshots; input order is preserved.

use crate::directory::{OnlineMerchant, Shop};

/// Filter online merchants by free-text query and exact category
///
/// A merchant matches when the query is blank or is a case-insensitive
/// substring of its name, description or any tag, AND the category is
/// `None` ("all") or equals its service type exactly.
pub fn search_merchants<'a>(
    merchants: &'a [OnlineMerchant],
    query: &str,
    category: Option<&str>,
) -> Vec<&'a OnlineMerchant> {
    merchants
        .iter()
        .filter(|m| merchant_matches(m, query))
        .filter(|m| category.is_none_or(|c| m.service_type.as_deref() == Some(c)))
        .collect()
}

/// Case-insensitive substring match against a merchant's text fields
fn merchant_matches(merchant: &OnlineMerchant, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();

    if merchant.name.to_lowercase().contains(&query) {
        return true;
    }
    if merchant
        .description
        .as_deref()
        .is_some_and(|d| d.to_lowercase().contains(&query))
    {
        return true;
    }
    merchant
        .tags
        .as_deref()
        .unwrap_or_default()
        .iter()
        .any(|tag| tag.to_lowercase().contains(&query))
}

/// Case-insensitive substring match against a shop's name, address or tags
pub fn shop_matches(shop: &Shop, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();

    if shop.name.to_lowercase().contains(&query) {
        return true;
    }
    if shop.address.to_lowercase().contains(&query) {
        return true;
    }
    shop.tags
        .as_deref()
        .unwrap_or_default()
        .iter()
        .any(|tag| tag.to_lowercase().contains(&query))
}

/// Distinct non-empty service types in first-observed order
///
/// These are the category choices offered alongside the merchant filter.
pub fn service_types(merchants: &[OnlineMerchant]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for merchant in merchants {
        if let Some(service_type) = &merchant.service_type {
            if !service_type.is_empty() && !seen.contains(service_type) {
                seen.push(service_type.clone());
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::test_fixtures::{merchant, shop};

    fn sample_merchants() -> Vec<OnlineMerchant> {
        let mut jpyc_books = merchant("JPYC Books", Some("EC・物販"));
        jpyc_books.description = Some("技術書のオンライン書店".to_string());
        jpyc_books.tags = Some(vec!["書籍".to_string(), "EC".to_string()]);

        let mut tip_jar = merchant("Tip Jar", Some("寄付"));
        tip_jar.description = Some("クリエイター向け投げ銭サービス".to_string());

        let plain = merchant("Plain Service", None);

        vec![jpyc_books, tip_jar, plain]
    }

    #[test]
    fn test_blank_query_and_no_category_is_identity() {
        let merchants = sample_merchants();
        let results = search_merchants(&merchants, "", None);
        assert_eq!(results.len(), merchants.len());
        for (result, original) in results.iter().zip(&merchants) {
            assert_eq!(result.name, original.name);
        }
    }

    #[test]
    fn test_query_matches_name_case_insensitive() {
        let merchants = sample_merchants();
        let results = search_merchants(&merchants, "jpyc", None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "JPYC Books");
    }

    #[test]
    fn test_query_matches_description() {
        let merchants = sample_merchants();
        let results = search_merchants(&merchants, "投げ銭", None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Tip Jar");
    }

    #[test]
    fn test_query_matches_tags() {
        let merchants = sample_merchants();
        let results = search_merchants(&merchants, "書籍", None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "JPYC Books");
    }

    #[test]
    fn test_category_is_exact_match() {
        let merchants = sample_merchants();
        let results = search_merchants(&merchants, "", Some("寄付"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Tip Jar");

        // Substring of a category does not match
        assert!(search_merchants(&merchants, "", Some("EC")).is_empty());
    }

    #[test]
    fn test_query_and_category_combine() {
        let merchants = sample_merchants();
        assert_eq!(search_merchants(&merchants, "jpyc", Some("EC・物販")).len(), 1);
        assert!(search_merchants(&merchants, "jpyc", Some("寄付")).is_empty());
    }

    #[test]
    fn test_no_match_returns_empty() {
        let merchants = sample_merchants();
        assert!(search_merchants(&merchants, "存在しない", None).is_empty());
    }

    #[test]
    fn test_service_types_distinct_in_observed_order() {
        let merchants = vec![
            merchant("A", Some("寄付")),
            merchant("B", Some("EC・物販")),
            merchant("C", Some("寄付")),
            merchant("D", None),
            merchant("E", Some("")),
        ];
        assert_eq!(service_types(&merchants), vec!["寄付", "EC・物販"]);
    }

    #[test]
    fn test_shop_matches_name_address_and_tags() {
        let mut s = shop("Crypto Cafe", 35.68, 139.76);
        s.tags = Some(vec!["カフェ".to_string()]);

        assert!(shop_matches(&s, ""));
        assert!(shop_matches(&s, "crypto"));
        assert!(shop_matches(&s, "丸の内"));
        assert!(shop_matches(&s, "カフェ"));
        assert!(!shop_matches(&s, "ラーメン"));
    }
}
