//! # Sentilist
//!
//! Sentilist is a decision-list sentiment classifier for short social-media
//! text. Training ranks bigram features by the absolute log-likelihood ratio
//! of their class counts; classification applies the highest-ranked rule
//! whose feature occurs in the text and falls back to the majority sentiment.
//!
//! ## Examples
//!
//! ```
//! use sentilist::{Classifier, Label, Trainer};
//!
//! let mut trainer = Trainer::new();
//! trainer.add_example(Label::Positive, "i love this movie so much");
//! trainer.add_example(Label::Negative, "i hate this movie so much");
//!
//! let model = trainer.train();
//! let classifier = Classifier::new(model);
//!
//! assert_eq!(Label::Negative, classifier.classify("we hate this weather"));
//! ```

mod classifier;
mod corpus;
mod errors;
mod feature;
mod model;
mod trainer;

pub use classifier::Classifier;
pub use corpus::{parse_corpus, Instance, Label};
pub use errors::{Result, SentilistError};
pub use feature::bigram_vector;
pub use model::{DecisionListEntry, Model};
pub use trainer::Trainer;
