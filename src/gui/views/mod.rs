//! GUI views

pub mod main_view;
pub mod recovery_view;

// Re-export for convenience
pub use main_view::{main_view, MainViewState};
pub use recovery_view::recovery_view;
