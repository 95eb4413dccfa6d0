use showroom_core::{
    apply_filters, count_facets, CatalogData, CatalogItem, FacetCounts, FilterState, PageWindow,
};
use std::rc::Rc;

/// Narrowed list and facet counts for one filter state
/// Kept alongside the state they were computed from, so repeated
/// reads with an unchanged state never re-scan the collection
#[derive(Debug)]
struct Derived {
    filters: FilterState,
    narrowed: Vec<CatalogItem>,
    counts: FacetCounts,
}

/// Domain state of one gallery instance
///
/// The catalog is shared read-only; filter state and page window are
/// owned exclusively by this instance.
#[derive(Debug)]
pub struct GalleryState {
    pub catalog: Rc<CatalogData>,
    pub filters: FilterState,
    pub page: PageWindow,
    derived: Option<Derived>,
}

impl GalleryState {
    pub fn new(catalog: Rc<CatalogData>, page_size: usize) -> Self {
        Self {
            catalog,
            filters: FilterState::new(),
            page: PageWindow::new(page_size),
            derived: None,
        }
    }

    /// Replace the filter state wholesale
    /// Any actual change resets the page window to 1
    pub fn set_filters(&mut self, next: FilterState) {
        if next != self.filters {
            self.filters = next;
            self.page.reset();
        }
    }

    /// Recompute narrowed list and counts if the memo is stale
    pub fn ensure_derived(&mut self) {
        let stale = match &self.derived {
            Some(derived) => derived.filters != self.filters,
            None => true,
        };

        if stale {
            self.derived = Some(Derived {
                filters: self.filters.clone(),
                narrowed: apply_filters(&self.catalog.products, &self.filters),
                counts: count_facets(&self.catalog, &self.filters),
            });
        }
    }

    /// The narrowed product list for the current filter state
    pub fn narrowed(&mut self) -> &[CatalogItem] {
        self.ensure_derived();
        &self.derived.as_ref().unwrap().narrowed
    }

    /// Facet counts for the current filter state
    pub fn counts(&mut self) -> &FacetCounts {
        self.ensure_derived();
        &self.derived.as_ref().unwrap().counts
    }
}
