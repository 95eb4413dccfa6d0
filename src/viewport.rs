/// The scrollable page surface behind the gallery
///
/// Page navigation scrolls back to the top; opening the filter drawer
/// locks page scroll until the drawer closes.
pub trait Viewport {
    fn scroll_to_top(&mut self);
    fn lock_scroll(&mut self);
    fn unlock_scroll(&mut self);
}

/// Viewport that ignores every call (CLI usage)
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopViewport;

impl Viewport for NoopViewport {
    fn scroll_to_top(&mut self) {}
    fn lock_scroll(&mut self) {}
    fn unlock_scroll(&mut self) {}
}

#[cfg(test)]
pub mod recording {
    use super::Viewport;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    pub struct ViewportLog {
        pub scroll_to_top_calls: usize,
        pub lock_calls: usize,
        pub unlock_calls: usize,
        pub locked: bool,
    }

    /// Viewport that records calls; clones share one log
    #[derive(Debug, Clone, Default)]
    pub struct RecordingViewport {
        log: Rc<RefCell<ViewportLog>>,
    }

    impl RecordingViewport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn scroll_to_top_calls(&self) -> usize {
            self.log.borrow().scroll_to_top_calls
        }

        pub fn is_locked(&self) -> bool {
            self.log.borrow().locked
        }

        pub fn unlock_calls(&self) -> usize {
            self.log.borrow().unlock_calls
        }
    }

    impl Viewport for RecordingViewport {
        fn scroll_to_top(&mut self) {
            self.log.borrow_mut().scroll_to_top_calls += 1;
        }

        fn lock_scroll(&mut self) {
            let mut log = self.log.borrow_mut();
            log.lock_calls += 1;
            log.locked = true;
        }

        fn unlock_scroll(&mut self) {
            let mut log = self.log.borrow_mut();
            log.unlock_calls += 1;
            log.locked = false;
        }
    }
}
