use crate::models::FilterState;
use std::collections::BTreeSet;

/// Recognized query keys; anything else is ignored on read
const BRAND_KEY: &str = "brand";
const CATEGORY_KEY: &str = "category";

/// Serialize the filter state into query key/value pairs
/// One pair per non-empty group, slugs comma-joined in lexicographic
/// order; the empty state yields no pairs at all
pub fn to_query_pairs(filters: &FilterState) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    if !filters.brands.is_empty() {
        pairs.push((BRAND_KEY.to_string(), join_slugs(&filters.brands)));
    }
    if !filters.categories.is_empty() {
        pairs.push((CATEGORY_KEY.to_string(), join_slugs(&filters.categories)));
    }

    pairs
}

/// Serialize the filter state into the canonical query string
/// (no leading '?'); the empty state serializes to an empty string
pub fn serialize_filters(filters: &FilterState) -> String {
    to_query_pairs(filters)
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&")
}

/// Parse a query string into a filter state
/// Tolerates a leading '?', whitespace around tokens, empty tokens,
/// and duplicate slugs; unrecognized keys are ignored
pub fn parse_query(query: &str) -> FilterState {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut filters = FilterState::new();

    for pair in query.split('&') {
        if let Some((key, value)) = pair.split_once('=') {
            match key.trim() {
                BRAND_KEY => filters.brands = split_slugs(value),
                CATEGORY_KEY => filters.categories = split_slugs(value),
                _ => {}
            }
        }
    }

    filters
}

fn join_slugs(slugs: &BTreeSet<String>) -> String {
    slugs.iter().cloned().collect::<Vec<_>>().join(",")
}

fn split_slugs(value: &str) -> BTreeSet<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FacetGroup;

    #[test]
    fn test_empty_state_serializes_to_nothing() {
        assert_eq!(serialize_filters(&FilterState::new()), "");
        assert!(to_query_pairs(&FilterState::new()).is_empty());
    }

    #[test]
    fn test_serialization_is_sorted_and_comma_joined() {
        let filters = FilterState::new()
            .toggle(FacetGroup::Brand, "gelderland")
            .toggle(FacetGroup::Brand, "artifort")
            .toggle(FacetGroup::Category, "sofas");

        assert_eq!(
            serialize_filters(&filters),
            "brand=artifort,gelderland&category=sofas"
        );
    }

    #[test]
    fn test_round_trip_is_set_equal() {
        let filters = FilterState::new()
            .toggle(FacetGroup::Brand, "b")
            .toggle(FacetGroup::Brand, "a")
            .toggle(FacetGroup::Category, "x");

        assert_eq!(parse_query(&serialize_filters(&filters)), filters);
    }

    #[test]
    fn test_parse_tolerates_whitespace_and_empties() {
        let filters = parse_query("brand= a , ,b&category=x,");
        let brands: Vec<&str> = filters.brands.iter().map(String::as_str).collect();
        assert_eq!(brands, vec!["a", "b"]);
        assert_eq!(filters.categories.len(), 1);
    }

    #[test]
    fn test_parse_deduplicates() {
        let filters = parse_query("brand=a,a,a");
        assert_eq!(filters.brands.len(), 1);
    }

    #[test]
    fn test_parse_ignores_unrecognized_keys() {
        let filters = parse_query("?brand=a&utm_source=newsletter&page=3");
        let expected = FilterState::new().toggle(FacetGroup::Brand, "a");
        assert_eq!(filters, expected);
    }

    #[test]
    fn test_parse_hydrates_both_groups() {
        let filters = parse_query("?brand=a,b&category=x");
        assert_eq!(filters.brands.len(), 2);
        assert!(filters.brands.contains("a"));
        assert!(filters.brands.contains("b"));
        assert!(filters.categories.contains("x"));
    }

    #[test]
    fn test_empty_query_parses_to_empty_state() {
        assert!(parse_query("").is_empty());
        assert!(parse_query("?").is_empty());
    }
}
