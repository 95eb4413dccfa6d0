use crate::history::AddressBar;
use crate::state::{DrawerState, GalleryState};
use crate::viewport::Viewport;
use showroom_core::{
    paginate, parse_query, serialize_filters, CatalogData, CatalogItem, FacetCounts, FilterState,
    DEFAULT_PAGE_SIZE,
};
use std::rc::Rc;

/// One rendered page of the gallery
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub items: Vec<CatalogItem>,
    pub current_page: usize,
    pub total_pages: usize,
}

/// Owner of all mutable gallery state for one screen instance
///
/// Wires the pure engine to its two environment seams: the address
/// bar (history synchronization) and the viewport (scrolling). The
/// handler modules add the event entry points.
pub struct GalleryController {
    pub(crate) state: GalleryState,
    pub(crate) drawer: DrawerState,
    pub(crate) address: Box<dyn AddressBar>,
    pub(crate) viewport: Box<dyn Viewport>,
}

impl GalleryController {
    /// Build a controller and hydrate the filter state from whatever
    /// query the incoming address carries (read path; no write-back)
    pub fn new(
        catalog: Rc<CatalogData>,
        address: impl AddressBar + 'static,
        viewport: impl Viewport + 'static,
    ) -> Self {
        Self::with_page_size(catalog, DEFAULT_PAGE_SIZE, address, viewport)
    }

    pub fn with_page_size(
        catalog: Rc<CatalogData>,
        page_size: usize,
        address: impl AddressBar + 'static,
        viewport: impl Viewport + 'static,
    ) -> Self {
        let mut state = GalleryState::new(catalog, page_size);
        state.set_filters(parse_query(&address.query()));
        state.ensure_derived();

        Self {
            state,
            drawer: DrawerState::new(),
            address: Box::new(address),
            viewport: Box::new(viewport),
        }
    }

    /// The current selection, for checkbox rendering
    pub fn filters(&self) -> &FilterState {
        &self.state.filters
    }

    /// The shared, read-only catalog this gallery renders
    pub fn catalog(&self) -> Rc<CatalogData> {
        Rc::clone(&self.state.catalog)
    }

    /// Counts and disabled flags for every canonical facet value
    pub fn facet_counts(&mut self) -> &FacetCounts {
        self.state.counts()
    }

    /// The narrowed list before pagination
    pub fn narrowed_len(&mut self) -> usize {
        self.state.narrowed().len()
    }

    /// The visible page of the narrowed list
    pub fn page_view(&mut self) -> PageView {
        self.state.ensure_derived();
        let window = self.state.page;
        let slice = paginate(self.state.narrowed(), &window);

        PageView {
            items: slice.items.to_vec(),
            current_page: slice.current_page,
            total_pages: slice.total_pages,
        }
    }

    pub fn drawer_is_open(&self) -> bool {
        self.drawer.is_open
    }

    /// The query string currently in the address bar
    pub fn address_query(&self) -> String {
        self.address.query()
    }

    /// Write path of the address synchronizer: serialize the current
    /// filter state and replace the visible address entry.
    /// Rewriting an unchanged value is harmless and idempotent.
    pub(crate) fn sync_address(&mut self) {
        let query = serialize_filters(&self.state.filters);
        self.address.replace_query(&query);
    }
}

impl Drop for GalleryController {
    /// Teardown counts as an exit path: never leave the document
    /// scroll-locked behind an open drawer
    fn drop(&mut self) {
        if self.drawer.is_open {
            self.viewport.unlock_scroll();
        }
    }
}
