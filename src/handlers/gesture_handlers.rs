use crate::controller::GalleryController;

/// Touch entry points for the mobile filter drawer
/// Opening locks page scroll; the lock is released on close, on
/// gesture cancel while open, and on controller drop
impl GalleryController {
    pub fn drawer_touch_start(&mut self, x: f32) {
        self.drawer.touch_start(x);
    }

    pub fn drawer_touch_move(&mut self, x: f32) {
        self.drawer.touch_move(x);
    }

    pub fn drawer_touch_end(&mut self) {
        if self.drawer.touch_end().is_some() {
            self.apply_drawer_visibility();
        }
    }

    /// Click on the drawer toggle button
    pub fn toggle_drawer(&mut self) {
        self.drawer.is_open = !self.drawer.is_open;
        self.drawer.cancel();
        self.apply_drawer_visibility();
    }

    pub fn close_drawer(&mut self) {
        if self.drawer.is_open {
            self.toggle_drawer();
        }
    }

    fn apply_drawer_visibility(&mut self) {
        if self.drawer.is_open {
            self.viewport.lock_scroll();
        } else {
            self.viewport.unlock_scroll();
        }
    }
}
