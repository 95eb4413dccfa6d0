use crate::models::{CatalogData, CatalogItem, FacetGroup, FilterState};

/// Display state for one canonical facet value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetCount {
    pub slug: String,
    pub label: String,
    pub count: usize,
    pub selected: bool,
    /// Zero-count values render disabled unless currently selected,
    /// so a selected value can always be deselected
    pub disabled: bool,
}

/// Per-group facet counts, recomputed on every filter-state change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetCounts {
    pub brands: Vec<FacetCount>,
    pub categories: Vec<FacetCount>,
}

impl FacetCounts {
    pub fn group(&self, group: FacetGroup) -> &[FacetCount] {
        match group {
            FacetGroup::Brand => &self.brands,
            FacetGroup::Category => &self.categories,
        }
    }
}

/// Check the filter predicate against every group except `exclude`
/// This is the cross-filtering rule: a facet's own group selection
/// never constrains that facet's displayed counts
fn matches_other_groups(item: &CatalogItem, filters: &FilterState, exclude: FacetGroup) -> bool {
    if exclude != FacetGroup::Brand
        && !filters.brands.is_empty()
        && !filters.brands.contains(&item.brand_slug)
    {
        return false;
    }

    if exclude != FacetGroup::Category
        && !filters.categories.is_empty()
        && !filters.categories.contains(&item.category_slug)
    {
        return false;
    }

    true
}

/// Compute display counts for every canonical value of one group
/// Always enumerates the full canonical list in canonical order,
/// including zero-count values
pub fn count_group(data: &CatalogData, filters: &FilterState, group: FacetGroup) -> Vec<FacetCount> {
    let selected = filters.selected(group);

    data.canonical_values(group)
        .into_iter()
        .map(|value| {
            let count = data
                .products
                .iter()
                .filter(|item| {
                    item.slug_in_group(group) == value.slug
                        && matches_other_groups(item, filters, group)
                })
                .count();
            let is_selected = selected.contains(&value.slug);

            FacetCount {
                slug: value.slug.clone(),
                label: value.label.clone(),
                count,
                selected: is_selected,
                disabled: count == 0 && !is_selected,
            }
        })
        .collect()
}

/// Compute counts for both facet groups
pub fn count_facets(data: &CatalogData, filters: &FilterState) -> FacetCounts {
    FacetCounts {
        brands: count_group(data, filters, FacetGroup::Brand),
        categories: count_group(data, filters, FacetGroup::Category),
    }
}
