use crate::controller::GalleryController;

/// Page navigation entry points
/// Page-only navigation never touches the filter state or the
/// address; it clamps and scrolls back to the top
impl GalleryController {
    pub fn next_page(&mut self) {
        let len = self.state.narrowed().len();
        self.state.page.next(len);
        self.viewport.scroll_to_top();
    }

    pub fn prev_page(&mut self) {
        let len = self.state.narrowed().len();
        self.state.page.prev(len);
        self.viewport.scroll_to_top();
    }

    pub fn jump_to_page(&mut self, page: usize) {
        let len = self.state.narrowed().len();
        self.state.page.jump_to(page, len);
        self.viewport.scroll_to_top();
    }
}
