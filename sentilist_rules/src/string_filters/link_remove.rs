use crate::StringFilter;

/// Link removal filter. Removes every `http://` or `https://` prefixed
/// substring up to the next whitespace.
#[derive(Clone, Default)]
pub struct LinkRemoveFilter;

fn find_link(text: &str) -> Option<usize> {
    match (text.find("http://"), text.find("https://")) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

impl<S> StringFilter<S> for LinkRemoveFilter
where
    S: AsRef<str>,
{
    fn filter(&self, string: S) -> String {
        let mut text = string.as_ref();
        let mut result = String::with_capacity(text.len());
        while let Some(start) = find_link(text) {
            result.push_str(&text[..start]);
            let rest = &text[start..];
            text = rest.find(char::is_whitespace).map_or("", |end| &rest[end..]);
        }
        result.push_str(text);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_remove_http() {
        let filter = LinkRemoveFilter;
        assert_eq!(
            "check this out  so cool",
            filter.filter("check this out http://t.co/abc123 so cool")
        );
    }

    #[test]
    fn test_link_remove_https() {
        let filter = LinkRemoveFilter;
        assert_eq!("look ", filter.filter("look https://example.com/x?y=1"))
    }

    #[test]
    fn test_link_remove_multiple() {
        let filter = LinkRemoveFilter;
        assert_eq!(
            "a  b ",
            filter.filter("a http://one.example b https://two.example")
        );
    }

    #[test]
    fn test_link_remove_no_link() {
        let filter = LinkRemoveFilter;
        assert_eq!("nothing to see", filter.filter("nothing to see"));
    }

    #[test]
    fn test_link_remove_stops_at_whitespace() {
        let filter = LinkRemoveFilter;
        assert_eq!("before \nafter", filter.filter("before http://x\nafter"));
    }
}
