/// A single rule in the share-identifier extraction chain
///
/// Each matcher inspects the trimmed input independently and either yields the
/// captured identifier or passes, letting the next matcher in the chain try.
pub trait ShareIdMatcher: Send + Sync {
    /// Returns a unique identifier for this matcher (e.g., "hosted-share")
    fn id(&self) -> &'static str;

    /// Returns the identifier captured from `input`, if this rule applies
    fn capture<'a>(&self, input: &'a str) -> Option<&'a str>;
}
