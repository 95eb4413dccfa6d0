/// Products shown per gallery page
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// 1-based page window over the narrowed product list
/// Reset to page 1 whenever the filter state changes; otherwise moved
/// only by explicit next/prev/jump actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub current_page: usize,
    pub page_size: usize,
}

impl PageWindow {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Back to page 1 (required after any filter-state change)
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Total pages for a list of `len` items, minimum 1
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    /// Jump to a page, silently clamped to [1, total_pages]
    pub fn jump_to(&mut self, page: usize, len: usize) {
        self.current_page = page.clamp(1, self.total_pages(len));
    }

    pub fn next(&mut self, len: usize) {
        self.jump_to(self.current_page + 1, len);
    }

    pub fn prev(&mut self, len: usize) {
        self.jump_to(self.current_page.saturating_sub(1), len);
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// One rendered page of the narrowed list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlice<'a, T> {
    pub items: &'a [T],
    /// The page actually shown, after clamping
    pub current_page: usize,
    pub total_pages: usize,
}

/// Slice one page out of the narrowed list
/// An out-of-range window clamps to the nearest valid page rather
/// than erroring
pub fn paginate<'a, T>(items: &'a [T], window: &PageWindow) -> PageSlice<'a, T> {
    let total_pages = window.total_pages(items.len());
    let current_page = window.current_page.clamp(1, total_pages);

    let start = (current_page - 1) * window.page_size;
    let end = (start + window.page_size).min(items.len());
    let page_items = if start < items.len() {
        &items[start..end]
    } else {
        &[]
    };

    PageSlice {
        items: page_items,
        current_page,
        total_pages,
    }
}
