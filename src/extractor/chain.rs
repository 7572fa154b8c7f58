use crate::extractor::matchers::{GenericShareMatcher, HostedShareMatcher};
use crate::extractor::models::{MatchRule, ShareId};
use crate::extractor::traits::ShareIdMatcher;
use once_cell::sync::Lazy;
use tracing::{debug, error};

/// The share-identifier extraction chain
///
/// Holds an ordered list of matchers. The first matcher that captures wins;
/// when none does, the trimmed input minus trailing slashes is the identifier.
pub struct ShareIdExtractor {
    matchers: Vec<Box<dyn ShareIdMatcher>>,
}

static DEFAULT_EXTRACTOR: Lazy<Option<ShareIdExtractor>> =
    Lazy::new(|| match ShareIdExtractor::new() {
        Ok(extractor) => Some(extractor),
        Err(e) => {
            error!("Failed to build share-id matchers: {}", e);
            None
        }
    });

impl ShareIdExtractor {
    /// Hosted-domain matcher first, then the host-agnostic `/s/` matcher
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self::with_matchers(vec![
            Box::new(HostedShareMatcher::new()?),
            Box::new(GenericShareMatcher::new()?),
        ]))
    }

    /// Create an extractor with a custom ordered matcher chain
    pub fn with_matchers(matchers: Vec<Box<dyn ShareIdMatcher>>) -> Self {
        Self { matchers }
    }

    /// Extract a share identifier, reporting which rule produced it
    pub fn extract_detailed(&self, raw: &str) -> ShareId {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return ShareId {
                id: String::new(),
                rule: MatchRule::Fallback,
            };
        }

        for matcher in &self.matchers {
            if let Some(id) = matcher.capture(trimmed) {
                debug!("Share id captured by matcher: {}", matcher.id());
                return ShareId {
                    id: id.to_string(),
                    rule: MatchRule::Matcher(matcher.id()),
                };
            }
        }

        debug!("No matcher applied, treating input as a bare id");
        ShareId {
            id: trimmed.trim_end_matches('/').to_string(),
            rule: MatchRule::Fallback,
        }
    }

    pub fn extract(&self, raw: &str) -> String {
        self.extract_detailed(raw).id
    }
}

/// Extract a share identifier with the default matcher chain
pub fn extract_share_id_detailed(raw: &str) -> ShareId {
    match DEFAULT_EXTRACTOR.as_ref() {
        Some(extractor) => extractor.extract_detailed(raw),
        None => ShareId {
            id: raw.trim().to_string(),
            rule: MatchRule::Fallback,
        },
    }
}

/// Extract a share identifier from a share link or bare id.
///
/// Never fails: input that no matcher recognises is returned trimmed, and an
/// empty or blank input yields an empty string.
pub fn extract_share_id(raw: &str) -> String {
    extract_share_id_detailed(raw).id
}
