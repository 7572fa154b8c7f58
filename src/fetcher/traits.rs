use crate::fetcher::models::MetadataResult;
use crate::utils::error::TeraPeekError;
use async_trait::async_trait;

/// Anything that can resolve a share identifier into metadata
///
/// This isolates the inspect pipeline from the concrete worker proxy so tests
/// and alternative backends can stand in for it.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Returns a unique identifier for this source (e.g., "worker-proxy")
    fn id(&self) -> &'static str;

    /// Fetch metadata for a non-empty share identifier
    async fn fetch_metadata(&self, share_id: &str) -> Result<MetadataResult, TeraPeekError>;

    /// Fetch raw thumbnail bytes (default implementation reports no support)
    async fn fetch_thumbnail(&self, url: &str) -> Result<Vec<u8>, TeraPeekError> {
        Err(TeraPeekError::Transport {
            kind: crate::utils::error::TransportKind::Other,
            message: format!("{} cannot fetch thumbnails ({})", self.id(), url),
        })
    }
}
