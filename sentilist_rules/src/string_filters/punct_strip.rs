use crate::StringFilter;

/// Punctuation stripping filter. Replaces every run of characters other than
/// ASCII letters, digits, whitespace, `#`, and `'` with a single space, so
/// hashtags and contractions survive as single tokens while punctuation
/// splits its neighbors apart.
#[derive(Clone, Default)]
pub struct PunctStripFilter;

fn is_retained(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_whitespace() || c == '#' || c == '\''
}

impl<S> StringFilter<S> for PunctStripFilter
where
    S: AsRef<str>,
{
    fn filter(&self, string: S) -> String {
        let text = string.as_ref();
        let mut result = String::with_capacity(text.len());
        let mut in_run = false;
        for c in text.chars() {
            if is_retained(c) {
                result.push(c);
                in_run = false;
            } else if !in_run {
                result.push(' ');
                in_run = true;
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punct_strip() {
        let filter = PunctStripFilter;
        assert_eq!("what a day ", filter.filter("what a day!!!"));
    }

    #[test]
    fn test_punct_strip_splits_words() {
        let filter = PunctStripFilter;
        assert_eq!("good bad", filter.filter("good,bad"));
    }

    #[test]
    fn test_punct_strip_keeps_hashtags_and_contractions() {
        let filter = PunctStripFilter;
        assert_eq!("#blessed i'm happy", filter.filter("#blessed i'm happy"));
    }

    #[test]
    fn test_punct_strip_run_becomes_one_space() {
        let filter = PunctStripFilter;
        assert_eq!("wow really", filter.filter("wow?!?!really"));
    }

    #[test]
    fn test_punct_strip_non_ascii() {
        let filter = PunctStripFilter;
        assert_eq!("caf  con leche", filter.filter("café con leche"));
    }
}
