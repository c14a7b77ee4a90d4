//! Decision-list training.

use hashbrown::HashMap;

use crate::corpus::Label;
use crate::feature::bigram_vector;
use crate::model::{DecisionListEntry, Model};

// Substituted for an absent class count so the likelihood ratio stays finite.
const SMOOTHING: f64 = 0.001;

#[derive(Clone, Copy, Default)]
struct ClassCounts {
    negative: u32,
    positive: u32,
}

/// Trainer.
///
/// Accumulates bigram class counts over a training corpus, then ranks the
/// features by how discriminative they are.
///
/// # Examples
///
/// ```
/// use std::io::BufWriter;
///
/// use sentilist::{Label, Trainer};
///
/// let mut trainer = Trainer::new();
/// trainer.add_example(Label::Positive, "what a great day");
/// trainer.add_example(Label::Negative, "what a terrible day");
///
/// let model = trainer.train();
/// let mut f = BufWriter::new(vec![]);
/// model.write(&mut f).unwrap();
/// ```
#[derive(Default)]
pub struct Trainer {
    feature_counts: HashMap<String, ClassCounts>,
    n_negative: usize,
    n_positive: usize,
}

impl Trainer {
    /// Creates a new trainer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one normalized training text with its gold label.
    ///
    /// Every bigram of the text contributes its occurrence count to the
    /// feature's count for `label`, so a feature repeated within one text
    /// counts multiple times.
    pub fn add_example(&mut self, label: Label, text: &str) {
        match label {
            Label::Negative => self.n_negative += 1,
            Label::Positive => self.n_positive += 1,
        }
        for (feature, count) in bigram_vector(text) {
            let counts = self.feature_counts.entry(feature).or_default();
            match label {
                Label::Negative => counts.negative += count,
                Label::Positive => counts.positive += count,
            }
        }
    }

    /// Gets the number of distinct features seen so far.
    pub fn n_features(&self) -> usize {
        self.feature_counts.len()
    }

    /// Gets the number of training examples seen so far.
    pub fn n_examples(&self) -> usize {
        self.n_negative + self.n_positive
    }

    /// Ranks all observed features and builds the final model.
    ///
    /// Each feature is scored with the absolute natural log of the ratio of
    /// its smoothed class counts and assigned the dominant class; a count tie
    /// resolves to positive. Features whose score is exactly zero are
    /// non-discriminative and dropped. The surviving entries are sorted
    /// descending by score, with ties broken by the feature string so the
    /// ranking is reproducible.
    ///
    /// The majority sentiment is taken from the raw instance counts, with
    /// negative winning only on a strict majority.
    pub fn train(self) -> Model {
        let majority = if self.n_negative > self.n_positive {
            Label::Negative
        } else {
            Label::Positive
        };
        let mut entries: Vec<_> = self
            .feature_counts
            .into_iter()
            .map(|(feature, counts)| {
                let n = if counts.negative > 0 {
                    f64::from(counts.negative)
                } else {
                    SMOOTHING
                };
                let p = if counts.positive > 0 {
                    f64::from(counts.positive)
                } else {
                    SMOOTHING
                };
                DecisionListEntry {
                    feature,
                    score: (n / p).ln().abs(),
                    sentiment: if n > p { Label::Negative } else { Label::Positive },
                }
            })
            .filter(|entry| entry.score > 0.0)
            .collect();
        entries.sort_unstable_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.feature.cmp(&b.feature))
        });
        Model { entries, majority }
    }
}
