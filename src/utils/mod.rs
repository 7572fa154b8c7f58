//! Utility modules for error handling, configuration and formatting

pub mod config;
pub mod error;
pub mod format;

// Re-export for convenience
pub use config::AppSettings;
pub use error::{TeraPeekError, TransportKind};
pub use format::{human_file_size, human_file_size_opt};
