use hashbrown::HashMap;

use crate::StringFilter;

/// Acronym expansion filter. Expands recognized social-media shorthand into
/// its spelled-out form, whole-word only, so shorthand embedded in longer
/// words ("url" inside "curl") is never expanded.
pub struct AcronymExpandFilter {
    expansions: HashMap<&'static str, &'static str>,
}

impl AcronymExpandFilter {
    /// Creates a new AcronymExpandFilter.
    pub fn new() -> Self {
        let expansions = [
            ("lol", "laugh out loud"),
            ("omg", "oh my god"),
            ("jk", "just kidding"),
            ("btw", "by the way"),
            ("tbh", "to be honest"),
            ("ngl", "not going to lie"),
            ("bc", "because"),
            ("w/e", "whatever"),
            ("w/", "with"),
            ("y", "why"),
            ("u", "you"),
            ("ur", "your"),
            ("r", "are"),
            ("yolo", "you only live once"),
            ("ty", "thank you"),
            ("yw", "you're welcome"),
            ("pls", "please"),
            ("ppl", "you will"),
            ("txt", "text"),
            ("fyi", "for your information"),
            ("ymmv", "your mileage my vary"),
            ("pov", "point of view"),
            ("rn", "right now"),
            ("rip", "rest in piece"),
            ("idk", "i don't know"),
            ("aka", "also known as"),
            ("rofl", "rolling on the floor laughing"),
            ("imo", "in my opinion"),
            ("ikr", "i know right"),
            ("tmi", "too much information"),
            ("obv", "obviously"),
        ]
        .into_iter()
        .collect();
        Self { expansions }
    }
}

impl Default for AcronymExpandFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StringFilter<S> for AcronymExpandFilter
where
    S: AsRef<str>,
{
    fn filter(&self, string: S) -> String {
        string
            .as_ref()
            .split_whitespace()
            .map(|word| self.expansions.get(word).copied().unwrap_or(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acronym_expand() {
        let filter = AcronymExpandFilter::new();
        assert_eq!(
            "laugh out loud that was great",
            filter.filter("lol that was great")
        );
    }

    #[test]
    fn test_acronym_expand_single_letter() {
        let filter = AcronymExpandFilter::new();
        assert_eq!("are you ok", filter.filter("r u ok"));
    }

    #[test]
    fn test_acronym_expand_whole_word_only() {
        let filter = AcronymExpandFilter::new();
        assert_eq!("lollipop your curl", filter.filter("lollipop your curl"));
    }

    #[test]
    fn test_acronym_expand_multiple() {
        let filter = AcronymExpandFilter::new();
        assert_eq!(
            "oh my god i don't know to be honest",
            filter.filter("omg idk tbh")
        );
    }

    #[test]
    fn test_acronym_expand_empty() {
        let filter = AcronymExpandFilter::new();
        assert_eq!("", filter.filter(""));
    }
}
