use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// The two filterable dimensions of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetGroup {
    Brand,
    Category,
}

/// One selectable brand or category from the canonical taxonomy
/// The canonical lists are the only authority for which facet values
/// exist; they are never derived from the product collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetValue {
    pub slug: String,
    pub label: String,
    pub sort_order: i32,
    /// Secondary display-grouping key (categories only), no filtering semantics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav_group: Option<String>,
}

/// One product in the catalog
/// Display-only fields (price, images, copy) ride along in `extra`
/// and are ignored by the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub brand_slug: String,
    pub category_slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl CatalogItem {
    /// The item's slug in the given facet group
    pub fn slug_in_group(&self, group: FacetGroup) -> &str {
        match group {
            FacetGroup::Brand => &self.brand_slug,
            FacetGroup::Category => &self.category_slug,
        }
    }

    /// Display name, falling back to the id
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// The loaded catalog: canonical taxonomy plus the product collection
/// Loaded once, immutable for the process lifetime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub brands: Vec<FacetValue>,
    pub categories: Vec<FacetValue>,
    pub products: Vec<CatalogItem>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl CatalogData {
    /// Canonical brand list in canonical order (by sort_order, then slug)
    pub fn canonical_brands(&self) -> Vec<&FacetValue> {
        sorted_canonical(&self.brands)
    }

    /// Canonical category list in canonical order (by sort_order, then slug)
    pub fn canonical_categories(&self) -> Vec<&FacetValue> {
        sorted_canonical(&self.categories)
    }

    /// Canonical values of the given group, in canonical order
    pub fn canonical_values(&self, group: FacetGroup) -> Vec<&FacetValue> {
        match group {
            FacetGroup::Brand => self.canonical_brands(),
            FacetGroup::Category => self.canonical_categories(),
        }
    }
}

fn sorted_canonical(values: &[FacetValue]) -> Vec<&FacetValue> {
    let mut sorted: Vec<&FacetValue> = values.iter().collect();
    sorted.sort_by(|a, b| {
        a.sort_order
            .cmp(&b.sort_order)
            .then_with(|| a.slug.cmp(&b.slug))
    });
    sorted
}

/// The user's current selection: one slug set per facet group
///
/// Immutable value object: every mutation returns a new snapshot.
/// Backed by ordered sets so two states compare equal regardless of
/// insertion order and iteration is lexicographic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub brands: BTreeSet<String>,
    pub categories: BTreeSet<String>,
}

impl FilterState {
    /// The canonical empty state (no constraint in either group)
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new state with `slug` added to `group`'s set if absent,
    /// removed if present
    pub fn toggle(&self, group: FacetGroup, slug: &str) -> FilterState {
        let mut next = self.clone();
        let set = match group {
            FacetGroup::Brand => &mut next.brands,
            FacetGroup::Category => &mut next.categories,
        };
        if !set.remove(slug) {
            set.insert(slug.to_string());
        }
        next
    }

    /// The canonical empty state
    pub fn clear(&self) -> FilterState {
        FilterState::new()
    }

    /// True iff both sets are empty
    pub fn is_empty(&self) -> bool {
        self.brands.is_empty() && self.categories.is_empty()
    }

    /// The selected slugs for one group
    pub fn selected(&self, group: FacetGroup) -> &BTreeSet<String> {
        match group {
            FacetGroup::Brand => &self.brands,
            FacetGroup::Category => &self.categories,
        }
    }
}
