//! Regex-backed share-link matchers

use crate::extractor::traits::ShareIdMatcher;
use regex::Regex;

/// Hosting domains whose share links are recognised by [`HostedShareMatcher`]
pub const KNOWN_HOSTS: [&str; 5] = [
    "terabox",
    "terasharelink",
    "terashare",
    "1024tera",
    "teraboxcdn",
];

/// Top-level domains accepted after a known host
pub const KNOWN_TLDS: [&str; 5] = ["com", "net", "org", "app", "cn"];

/// Everything after `/s/` up to the next `/`, `?` or `#`
const SHARE_SEGMENT: &str = r"/s/([^/?#]+)";

/// Matches `http(s)://[www.]<known host>.<known tld>/s/<id>`
pub struct HostedShareMatcher {
    pattern: Regex,
}

impl HostedShareMatcher {
    pub fn new() -> Result<Self, regex::Error> {
        let pattern = format!(
            r"(?i)https?://(?:www\.)?(?:{})\.(?:{}){}",
            KNOWN_HOSTS.join("|"),
            KNOWN_TLDS.join("|"),
            SHARE_SEGMENT
        );
        Ok(Self {
            pattern: Regex::new(&pattern)?,
        })
    }
}

impl ShareIdMatcher for HostedShareMatcher {
    fn id(&self) -> &'static str {
        "hosted-share"
    }

    fn capture<'a>(&self, input: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(input)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// Matches the first `/s/<id>` anywhere in the input, regardless of host
pub struct GenericShareMatcher {
    pattern: Regex,
}

impl GenericShareMatcher {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(&format!("(?i){}", SHARE_SEGMENT))?,
        })
    }
}

impl ShareIdMatcher for GenericShareMatcher {
    fn id(&self) -> &'static str {
        "generic-share"
    }

    fn capture<'a>(&self, input: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(input)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}
