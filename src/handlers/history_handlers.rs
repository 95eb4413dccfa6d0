use crate::controller::GalleryController;
use showroom_core::parse_query;

/// Read path of the address synchronizer
///
/// Browser back/forward landed on a different history entry: re-parse
/// the now-current address, overwrite the filter state directly, and
/// reset pagination. This is the one mutation that bypasses
/// toggle/clear, and it must not re-enter the write path.
impl GalleryController {
    pub fn handle_address_change(&mut self) {
        let filters = parse_query(&self.address.query());
        self.state.set_filters(filters);
        self.state.page.reset();
        self.state.ensure_derived();
    }
}

#[cfg(test)]
mod tests {
    use crate::controller::GalleryController;
    use crate::history::InMemoryAddressBar;
    use crate::viewport::recording::RecordingViewport;
    use showroom_core::{CatalogData, CatalogItem, FacetValue};
    use std::collections::HashMap;
    use std::rc::Rc;

    fn facet(slug: &str, order: i32) -> FacetValue {
        FacetValue {
            slug: slug.to_string(),
            label: slug.to_uppercase(),
            sort_order: order,
            nav_group: None,
        }
    }

    fn product(id: &str, brand: &str, category: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            brand_slug: brand.to_string(),
            category_slug: category.to_string(),
            name: None,
            extra: HashMap::new(),
        }
    }

    fn catalog() -> Rc<CatalogData> {
        Rc::new(CatalogData {
            brands: vec![facet("a", 1), facet("b", 2)],
            categories: vec![facet("x", 1), facet("y", 2)],
            products: vec![product("1", "a", "x"), product("2", "b", "y"), product("3", "a", "y")],
            extra: HashMap::new(),
        })
    }

    fn controller_with(query: &str) -> (GalleryController, InMemoryAddressBar) {
        let address = InMemoryAddressBar::new(query);
        let controller = GalleryController::with_page_size(
            catalog(),
            2,
            address.clone(),
            RecordingViewport::new(),
        );
        (controller, address)
    }

    #[test]
    fn test_initial_load_hydrates_from_address() {
        let (mut controller, address) = controller_with("?brand=a,b&category=x");

        assert!(controller.filters().brands.contains("a"));
        assert!(controller.filters().brands.contains("b"));
        assert!(controller.filters().categories.contains("x"));
        // Only product 1 is brand a/b AND category x
        assert_eq!(controller.narrowed_len(), 1);
        // Hydration is a read, not a write
        assert_eq!(address.replace_count(), 0);
    }

    #[test]
    fn test_back_navigation_overwrites_state_without_write() {
        let (mut controller, address) = controller_with("");
        controller.toggle_brand("a");
        let writes_after_toggle = address.replace_count();

        // The browser restores the previous entry
        address.set_query("");
        controller.handle_address_change();

        assert!(controller.filters().is_empty());
        assert_eq!(controller.narrowed_len(), 3);
        assert_eq!(address.replace_count(), writes_after_toggle);
    }

    #[test]
    fn test_address_change_resets_page() {
        let (mut controller, address) = controller_with("");
        controller.next_page();
        assert_eq!(controller.page_view().current_page, 2);

        address.set_query("?category=y");
        controller.handle_address_change();

        assert_eq!(controller.page_view().current_page, 1);
        assert_eq!(controller.narrowed_len(), 2);
    }

    #[test]
    fn test_forward_to_same_state_is_idempotent() {
        let (mut controller, address) = controller_with("?brand=a");
        let filters_before = controller.filters().clone();

        address.set_query("?brand=a");
        controller.handle_address_change();

        assert_eq!(controller.filters(), &filters_before);
    }
}
