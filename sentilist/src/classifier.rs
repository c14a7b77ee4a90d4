//! Decision-list classification.

use crate::corpus::Label;
use crate::model::Model;

/// Classifier.
///
/// Applies a trained decision list to normalized text. Rules are tried in
/// their stored rank order and the scan stops at the first match, so a
/// higher-ranked rule always wins even when lower-ranked rules also match.
pub struct Classifier {
    model: Model,
    fallback: Label,
}

impl Classifier {
    /// Creates a new classifier.
    ///
    /// The fallback sentiment defaults to the model's majority sentiment.
    pub fn new(model: Model) -> Self {
        let fallback = model.majority();
        Self { model, fallback }
    }

    /// Sets the fallback sentiment returned when no rule matches.
    pub fn fallback(mut self, label: Label) -> Self {
        self.fallback = label;
        self
    }

    /// Predicts the sentiment of a normalized text.
    ///
    /// A rule matches when its feature occurs as a literal substring of the
    /// text, anywhere, not only on bigram boundaries. Texts matching no rule
    /// get the fallback sentiment, so a label is always returned.
    pub fn classify(&self, text: &str) -> Label {
        for entry in self.model.entries() {
            if text.contains(entry.feature.as_str()) {
                return entry.sentiment;
            }
        }
        self.fallback
    }
}
