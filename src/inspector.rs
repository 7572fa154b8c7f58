//! Inspect pipeline: raw input -> share identifier -> worker metadata

use crate::extractor::{extract_share_id_detailed, MatchRule, ShareId};
use crate::fetcher::{MetadataResult, MetadataSource};
use crate::utils::error::TeraPeekError;
use std::sync::Arc;
use tracing::{debug, info};

/// Outcome of one successful inspect action
#[derive(Debug, Clone)]
pub struct Inspection {
    pub share: ShareId,
    pub metadata: MetadataResult,
}

impl Inspection {
    /// Plain-text summary with the same fields as the GUI metadata grid
    pub fn report(&self) -> String {
        let rule = match self.share.rule {
            MatchRule::Matcher(id) => id,
            MatchRule::Fallback => "bare id",
        };
        let size_bytes = self
            .metadata
            .size_bytes()
            .map(|b| b.to_string())
            .unwrap_or_else(|| "-".to_string());

        [
            format!("Share id:     {} ({})", self.share.id, rule),
            format!("File name:    {}", self.metadata.file_name().unwrap_or("-")),
            format!("Size:         {}", self.metadata.display_size()),
            format!("Size (bytes): {}", size_bytes),
            format!("Thumbnail:    {}", self.metadata.thumb().unwrap_or("-")),
            format!("Direct link:  {}", self.metadata.direct_link()),
        ]
        .join("\n")
    }
}

/// Validate raw input and extract its share identifier.
///
/// Blank input and input that reduces to an empty identifier are reported
/// before any network traffic happens.
pub fn prepare(raw: &str) -> Result<ShareId, TeraPeekError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TeraPeekError::EmptyInput);
    }

    let share = extract_share_id_detailed(trimmed);
    if share.is_empty() {
        return Err(TeraPeekError::NoIdentifier);
    }
    if share.is_fallback() {
        debug!("No share link pattern matched, using input as id");
    }
    Ok(share)
}

/// Runs inspect actions against a metadata source
#[derive(Clone)]
pub struct Inspector {
    source: Arc<dyn MetadataSource>,
}

impl Inspector {
    pub fn new(source: Arc<dyn MetadataSource>) -> Self {
        Self { source }
    }

    pub fn source(&self) -> Arc<dyn MetadataSource> {
        Arc::clone(&self.source)
    }

    /// Run the whole pipeline once. Concurrent calls are independent.
    pub async fn inspect(&self, raw: &str) -> Result<Inspection, TeraPeekError> {
        let share = prepare(raw)?;
        self.inspect_share(share).await
    }

    /// Fetch metadata for an identifier already produced by [`prepare`]
    pub async fn inspect_share(&self, share: ShareId) -> Result<Inspection, TeraPeekError> {
        let metadata = self.source.fetch_metadata(&share.id).await?;
        info!(
            "Inspected {} via {}: {}",
            share.id,
            self.source.id(),
            metadata.file_name().unwrap_or("<unnamed>")
        );
        Ok(Inspection { share, metadata })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Records requested ids and answers with a canned result
    struct RecordingSource {
        requested: Mutex<Vec<String>>,
        answer: fn() -> Result<MetadataResult, TeraPeekError>,
    }

    impl RecordingSource {
        fn new(answer: fn() -> Result<MetadataResult, TeraPeekError>) -> Arc<Self> {
            Arc::new(Self {
                requested: Mutex::new(Vec::new()),
                answer,
            })
        }
    }

    #[async_trait]
    impl MetadataSource for RecordingSource {
        fn id(&self) -> &'static str {
            "recording"
        }

        async fn fetch_metadata(&self, share_id: &str) -> Result<MetadataResult, TeraPeekError> {
            self.requested.lock().unwrap().push(share_id.to_string());
            (self.answer)()
        }
    }

    fn ok_answer() -> Result<MetadataResult, TeraPeekError> {
        MetadataResult::from_value(json!({"directlink": "https://x/y.mp4", "file_name": "a.mp4"}))
    }

    #[test]
    fn test_prepare_rejects_blank_input() {
        assert!(matches!(prepare(""), Err(TeraPeekError::EmptyInput)));
        assert!(matches!(prepare("  \n"), Err(TeraPeekError::EmptyInput)));
    }

    #[test]
    fn test_prepare_rejects_empty_identifier() {
        assert!(matches!(prepare("///"), Err(TeraPeekError::NoIdentifier)));
    }

    #[test]
    fn test_prepare_extracts_identifier() {
        let share = prepare(" https://terabox.com/s/1abc?x=1 ").unwrap();
        assert_eq!(share.id, "1abc");
        assert!(!share.is_fallback());
    }

    #[tokio::test]
    async fn test_inspect_passes_extracted_id_to_source() {
        let source = RecordingSource::new(ok_answer);
        let inspector = Inspector::new(source.clone());

        let inspection = inspector
            .inspect("https://www.terasharelink.com/s/1xyz#frag")
            .await
            .expect("inspect");

        assert_eq!(inspection.share.id, "1xyz");
        assert_eq!(inspection.metadata.file_name(), Some("a.mp4"));
        assert_eq!(*source.requested.lock().unwrap(), vec!["1xyz".to_string()]);
    }

    #[tokio::test]
    async fn test_input_errors_never_reach_the_source() {
        let source = RecordingSource::new(ok_answer);
        let inspector = Inspector::new(source.clone());

        assert!(inspector.inspect("   ").await.is_err());
        assert!(inspector.inspect("//").await.is_err());
        assert!(source.requested.lock().unwrap().is_empty());
    }

    #[test]
    fn test_report_lists_grid_fields() {
        let inspection = Inspection {
            share: prepare("https://terabox.com/s/1abc").unwrap(),
            metadata: MetadataResult::from_value(json!({
                "directlink": "https://x/y.mp4",
                "file_name": "a.mp4",
                "sizebytes": 1024
            }))
            .unwrap(),
        };
        let report = inspection.report();
        assert!(report.contains("Share id:     1abc (hosted-share)"));
        assert!(report.contains("Size:         1.00 KB"));
        assert!(report.contains("Size (bytes): 1024"));
        assert!(report.contains("Thumbnail:    -"));
        assert!(report.ends_with("Direct link:  https://x/y.mp4"));
    }

    #[tokio::test]
    async fn test_source_errors_propagate() {
        let source = RecordingSource::new(|| Err(TeraPeekError::MissingDirectLink));
        let inspector = Inspector::new(source);

        let err = inspector.inspect("abc123").await.unwrap_err();
        assert!(matches!(err, TeraPeekError::MissingDirectLink));
    }
}
