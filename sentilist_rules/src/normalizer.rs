use crate::string_filters::{
    AcronymExpandFilter, EmoticonReplaceFilter, LinkRemoveFilter, LowercaseFilter, PunctStripFilter,
};
use crate::StringFilter;

/// The full normalization pipeline for tweet text.
///
/// Applies the five stages in a fixed order: case folding, link removal,
/// emoticon replacement, punctuation stripping, acronym expansion. The order
/// is load-bearing: emoticons are built from punctuation and must be
/// replaced before the punctuation pass deletes them, and acronym expansions
/// are multi-word and must not be re-mangled by an earlier pass.
///
/// The output is whitespace-canonical (single spaces, no leading or trailing
/// whitespace), which makes normalization idempotent.
///
/// # Examples
///
/// ```
/// use sentilist_rules::{StringFilter, TweetNormalizer};
///
/// let normalizer = TweetNormalizer::new();
/// assert_eq!(
///     "oh my god best day ever smile",
///     normalizer.filter("OMG best day ever!! :) http://t.co/xyz"),
/// );
/// ```
#[derive(Default)]
pub struct TweetNormalizer {
    lowercase: LowercaseFilter,
    links: LinkRemoveFilter,
    emoticons: EmoticonReplaceFilter,
    punct: PunctStripFilter,
    acronyms: AcronymExpandFilter,
}

impl TweetNormalizer {
    /// Creates a new TweetNormalizer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S> StringFilter<S> for TweetNormalizer
where
    S: AsRef<str>,
{
    fn filter(&self, string: S) -> String {
        let text = self.lowercase.filter(string);
        let text = self.links.filter(text);
        let text = self.emoticons.filter(text);
        let text = self.punct.filter(text);
        self.acronyms.filter(text)
    }
}
