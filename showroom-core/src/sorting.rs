use crate::models::CatalogItem;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Sort products by display name for catalog listings
/// Display-only: the filter engine itself is order-preserving and
/// never re-sorts
pub fn sort_products_by_name(products: &mut [CatalogItem]) {
    products.sort_by(|a, b| {
        let a_key = normalize_for_sorting(a.display_name());
        let b_key = normalize_for_sorting(b.display_name());

        match a_key.cmp(&b_key) {
            std::cmp::Ordering::Equal => a.display_name().cmp(b.display_name()),
            other => other,
        }
    });
}

/// Normalize a display name for sorting
/// - Strip leading articles (a, an, the and common Dutch/German ones)
/// - Unicode NFD decomposition, lowercased
/// - Collapse internal whitespace
pub fn normalize_for_sorting(s: &str) -> String {
    let without_articles = strip_leading_articles(s);
    let normalized: String = without_articles.nfd().collect::<String>().to_lowercase();
    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip a leading article following library cataloging conventions
pub fn strip_leading_articles(s: &str) -> String {
    let re = Regex::new(r"^(?i)(the|a|an|de|het|een|der|die|das|le|la|les)\s+").unwrap();
    re.replace(s, "").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn product(id: &str, name: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            brand_slug: "b".to_string(),
            category_slug: "c".to_string(),
            name: Some(name.to_string()),
            extra: HashMap::new(),
        }
    }

    #[test]
    fn test_leading_articles_are_ignored() {
        let mut products = vec![product("1", "The Oslo Sofa"), product("2", "Bergen Chair")];
        sort_products_by_name(&mut products);
        let names: Vec<&str> = products.iter().map(|p| p.display_name()).collect();
        assert_eq!(names, vec!["Bergen Chair", "The Oslo Sofa"]);
    }

    #[test]
    fn test_accents_sort_with_their_base_letter() {
        assert_eq!(normalize_for_sorting("Élan"), normalize_for_sorting("Elan"));
    }

    #[test]
    fn test_nameless_products_fall_back_to_id() {
        let mut nameless = product("fallback-id", "x");
        nameless.name = None;
        assert_eq!(nameless.display_name(), "fallback-id");
    }
}
