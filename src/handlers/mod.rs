pub mod filter_handlers;
pub mod gesture_handlers;
pub mod history_handlers;
pub mod page_handlers;
