//! Feature extraction.

use hashbrown::HashMap;

/// Extracts the bigram feature vector of one normalized text.
///
/// The text is split on whitespace and a window of two tokens slides over the
/// sequence with stride 1; each window is joined with a single space to form
/// a feature, whose occurrence count is accumulated. A text with fewer than
/// two tokens yields an empty vector.
pub fn bigram_vector(text: &str) -> HashMap<String, u32> {
    let mut vector = HashMap::new();
    let tokens: Vec<_> = text.split_whitespace().collect();
    for window in tokens.windows(2) {
        *vector
            .entry(format!("{} {}", window[0], window[1]))
            .or_insert(0) += 1;
    }
    vector
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bigram_vector_sliding_window() {
        let vector = bigram_vector("a b c d");

        assert_eq!(3, vector.len());
        assert_eq!(Some(&1), vector.get("a b"));
        assert_eq!(Some(&1), vector.get("b c"));
        assert_eq!(Some(&1), vector.get("c d"));
    }

    #[test]
    fn test_bigram_vector_counts_repetitions() {
        let vector = bigram_vector("so so so bad");

        assert_eq!(Some(&2), vector.get("so so"));
        assert_eq!(Some(&1), vector.get("so bad"));
    }

    #[test]
    fn test_bigram_vector_single_token() {
        assert!(bigram_vector("hello").is_empty());
    }

    #[test]
    fn test_bigram_vector_empty() {
        assert!(bigram_vector("").is_empty());
    }

    #[test]
    fn test_bigram_vector_collapses_whitespace() {
        let vector = bigram_vector("  not \t good ");

        assert_eq!(1, vector.len());
        assert_eq!(Some(&1), vector.get("not good"));
    }
}
