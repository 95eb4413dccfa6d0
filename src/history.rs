use std::cell::RefCell;
use std::rc::Rc;

/// The visible address bar, as far as the gallery is concerned
///
/// The write path replaces the current history entry (non-pushing
/// navigation) so checkbox clicks never pile up back-stack entries;
/// the read path re-reads whatever entry the browser landed on.
pub trait AddressBar {
    /// The current query string, without a leading '?'
    fn query(&self) -> String;

    /// Replace the current history entry's query string
    fn replace_query(&mut self, query: &str);
}

#[derive(Debug, Default)]
struct AddressInner {
    query: String,
    replace_count: usize,
}

/// In-memory address bar for the CLI and for tests
/// Clones share the same underlying address, so a test can keep a
/// handle while the controller owns its own copy
#[derive(Debug, Clone, Default)]
pub struct InMemoryAddressBar {
    inner: Rc<RefCell<AddressInner>>,
}

impl InMemoryAddressBar {
    pub fn new(initial_query: &str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(AddressInner {
                query: initial_query.trim_start_matches('?').to_string(),
                replace_count: 0,
            })),
        }
    }

    /// Simulate an external navigation (back/forward landing on a
    /// different entry); does not count as a write
    pub fn set_query(&self, query: &str) {
        self.inner.borrow_mut().query = query.trim_start_matches('?').to_string();
    }

    /// How many times the write path has replaced the entry
    pub fn replace_count(&self) -> usize {
        self.inner.borrow().replace_count
    }
}

impl AddressBar for InMemoryAddressBar {
    fn query(&self) -> String {
        self.inner.borrow().query.clone()
    }

    fn replace_query(&mut self, query: &str) {
        let mut inner = self.inner.borrow_mut();
        inner.query = query.to_string();
        inner.replace_count += 1;
    }
}
