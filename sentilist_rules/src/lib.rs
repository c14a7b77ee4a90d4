//! Rule-based text normalization for Sentilist.
//!
//! Raw social-media text is noisy: links, emoticons, punctuation, and
//! shorthand all get in the way of bigram features. This crate provides the
//! individual normalization filters and [`TweetNormalizer`], which applies
//! them in the fixed order the classifier expects.

pub mod string_filters;

mod normalizer;

pub use normalizer::TweetNormalizer;

/// Trait of string filters.
pub trait StringFilter<S>
where
    S: AsRef<str>,
{
    /// Filters a string and returns a new one.
    fn filter(&self, string: S) -> String;
}
