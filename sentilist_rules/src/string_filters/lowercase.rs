use crate::StringFilter;

/// Case folding filter. Labels and ids are case-sensitive and never pass
/// through here; only context text does.
#[derive(Clone, Default)]
pub struct LowercaseFilter;

impl<S> StringFilter<S> for LowercaseFilter
where
    S: AsRef<str>,
{
    fn filter(&self, string: S) -> String {
        string.as_ref().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase() {
        let filter = LowercaseFilter;
        assert_eq!("best day ever", filter.filter("Best Day EVER"));
    }

    #[test]
    fn test_lowercase_leaves_symbols() {
        let filter = LowercaseFilter;
        assert_eq!("#blessed :d", filter.filter("#Blessed :D"));
    }
}
