pub mod drawer_state;
pub mod gallery_state;

pub use drawer_state::{DrawerPhase, DrawerState, GestureResolution, DRAG_CONFIRM_THRESHOLD_PX};
pub use gallery_state::GalleryState;
