//! GUI components

pub mod help_panel;
pub mod metadata_panel;
pub mod notice_banner;
pub mod share_input;

// Re-export for convenience
pub use help_panel::help_panel;
pub use metadata_panel::metadata_panel;
pub use notice_banner::notice_banner;
pub use share_input::share_input;
