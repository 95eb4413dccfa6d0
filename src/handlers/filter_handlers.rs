use crate::controller::GalleryController;
use showroom_core::{FacetGroup, FilterState};

/// Checkbox toggle and clear-filters entry points
///
/// A filter change is reflected in a fixed order before the next
/// paint: new filter state, page reset, narrowed list and counts
/// recomputed, address replaced. Recomputing before the page reset
/// could flash an out-of-range page.
impl GalleryController {
    pub fn toggle_facet(&mut self, group: FacetGroup, slug: &str) {
        let next = self.state.filters.toggle(group, slug);
        self.apply_filter_change(next);
    }

    pub fn toggle_brand(&mut self, slug: &str) {
        self.toggle_facet(FacetGroup::Brand, slug);
    }

    pub fn toggle_category(&mut self, slug: &str) {
        self.toggle_facet(FacetGroup::Category, slug);
    }

    /// The "clear filters" affordance shown with empty result sets
    pub fn clear_filters(&mut self) {
        let next = self.state.filters.clear();
        self.apply_filter_change(next);
    }

    fn apply_filter_change(&mut self, next: FilterState) {
        self.state.set_filters(next);
        self.state.ensure_derived();
        self.sync_address();
    }
}
