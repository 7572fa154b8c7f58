//! TeraPeek library

pub mod app;
pub mod extractor;
pub mod fetcher;
pub mod gui;
pub mod inspector;
pub mod preview;
pub mod utils;

// Re-export main types for easier use
pub use extractor::{extract_share_id, MatchRule, ShareId, ShareIdExtractor};
pub use fetcher::{MetadataFetcher, MetadataResult, MetadataSource};
pub use gui::{Message, TeraPeekApp};
pub use inspector::{Inspection, Inspector};
pub use utils::{human_file_size, AppSettings, TeraPeekError};
