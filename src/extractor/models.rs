//! Data structures for extracted share identifiers

use serde::Serialize;

/// Which rule produced a share identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchRule {
    /// A matcher in the chain captured the identifier
    Matcher(&'static str),
    /// Nothing matched; the whole trimmed input is the identifier
    Fallback,
}

/// Share identifier together with the rule that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareId {
    pub id: String,
    pub rule: MatchRule,
}

impl ShareId {
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }

    pub fn is_fallback(&self) -> bool {
        self.rule == MatchRule::Fallback
    }
}
