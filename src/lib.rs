// Public modules
pub mod controller;
pub mod errors;
pub mod handlers;
pub mod history;
pub mod state;
pub mod viewport;

// Re-export commonly used types for convenience
pub use controller::{GalleryController, PageView};
pub use history::{AddressBar, InMemoryAddressBar};
pub use state::{DrawerPhase, DrawerState, GalleryState, GestureResolution};
pub use viewport::{NoopViewport, Viewport};
