use hashbrown::HashMap;

use crate::StringFilter;

/// Emoticon replacement filter. Replaces recognized emoticon tokens with an
/// approximate word, whole-word only, so emoticons embedded in longer tokens
/// pass through unchanged.
///
/// This filter must run before punctuation stripping, while the emoticons
/// still exist.
pub struct EmoticonReplaceFilter {
    replacements: HashMap<&'static str, &'static str>,
}

impl EmoticonReplaceFilter {
    /// Creates a new EmoticonReplaceFilter.
    pub fn new() -> Self {
        // The input is case-folded before this filter runs, so the nose-less
        // grin is stored lower-cased as well.
        let replacements = [
            (":)", "smile"),
            (":(", "frown"),
            (":D", "smile"),
            (":d", "smile"),
            (";)", "wink"),
            (":/", "neutral"),
        ]
        .into_iter()
        .collect();
        Self { replacements }
    }
}

impl Default for EmoticonReplaceFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StringFilter<S> for EmoticonReplaceFilter
where
    S: AsRef<str>,
{
    fn filter(&self, string: S) -> String {
        string
            .as_ref()
            .split_whitespace()
            .map(|word| self.replacements.get(word).copied().unwrap_or(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emoticon_replace() {
        let filter = EmoticonReplaceFilter::new();
        assert_eq!("great day smile", filter.filter("great day :)"));
    }

    #[test]
    fn test_emoticon_replace_frown() {
        let filter = EmoticonReplaceFilter::new();
        assert_eq!("frown worst day", filter.filter(":( worst day"));
    }

    #[test]
    fn test_emoticon_replace_folded_grin() {
        let filter = EmoticonReplaceFilter::new();
        assert_eq!("so happy smile", filter.filter("so happy :d"));
    }

    #[test]
    fn test_emoticon_replace_whole_word_only() {
        let filter = EmoticonReplaceFilter::new();
        assert_eq!("it's 10:)am", filter.filter("it's 10:)am"));
    }

    #[test]
    fn test_emoticon_replace_unknown_passes_through() {
        let filter = EmoticonReplaceFilter::new();
        assert_eq!("hello ^^ there", filter.filter("hello ^^ there"));
    }
}
