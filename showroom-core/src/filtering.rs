use crate::models::{CatalogItem, FilterState};

/// Check if a product matches the current filter state
/// OR within a group (any selected brand matches), AND between groups
/// An empty group imposes no constraint
pub fn matches_filter(item: &CatalogItem, filters: &FilterState) -> bool {
    if !filters.brands.is_empty() && !filters.brands.contains(&item.brand_slug) {
        return false;
    }

    if !filters.categories.is_empty() && !filters.categories.contains(&item.category_slug) {
        return false;
    }

    true
}

/// Narrow the product collection to items matching the filter state
/// Stable: output preserves the input's relative order
pub fn apply_filters(items: &[CatalogItem], filters: &FilterState) -> Vec<CatalogItem> {
    if filters.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| matches_filter(item, filters))
        .cloned()
        .collect()
}
