pub mod client;
pub mod models;
pub mod traits;

pub use client::MetadataFetcher;
pub use models::{is_truthy, MetadataResult};
pub use traits::MetadataSource;
