//! Decision-list model and its on-disk representation.

use std::io::{BufRead, BufReader, Read, Write};

use crate::corpus::Label;
use crate::errors::{Result, SentilistError};

/// One rule of the decision list.
#[derive(Clone, Debug, PartialEq)]
pub struct DecisionListEntry {
    /// The bigram feature, tokens joined by a single space.
    pub feature: String,

    /// Absolute log-likelihood ratio of the smoothed class counts.
    pub score: f64,

    /// The class this rule predicts when its feature matches.
    pub sentiment: Label,
}

/// A trained decision-list model.
///
/// Entries are stored in rank order: descending by score, which is the order
/// the classifier applies them in and the order they are persisted in. Every
/// stored entry has a score strictly greater than zero.
pub struct Model {
    pub(crate) entries: Vec<DecisionListEntry>,
    pub(crate) majority: Label,
}

impl Model {
    /// Gets the ranked decision-list entries.
    pub fn entries(&self) -> &[DecisionListEntry] {
        &self.entries
    }

    /// Gets the majority sentiment of the training corpus.
    pub fn majority(&self) -> Label {
        self.majority
    }

    /// Exports the model data.
    ///
    /// One block is written per entry, in rank order:
    ///
    /// ```text
    /// Feature: <feature string>
    /// Log-likelihood: <float>
    /// Sentiment: <negative|positive>
    /// ```
    ///
    /// # Errors
    ///
    /// When `wtr` generates an error, it will be returned as is.
    pub fn write<W>(&self, wtr: &mut W) -> Result<()>
    where
        W: Write,
    {
        for entry in &self.entries {
            writeln!(wtr, "Feature: {}", entry.feature)?;
            writeln!(wtr, "Log-likelihood: {}", entry.score)?;
            writeln!(wtr, "Sentiment: {}", entry.sentiment)?;
            writeln!(wtr)?;
        }
        Ok(())
    }

    /// Creates a model from a reader over the text format written by
    /// [`Model::write`].
    ///
    /// The majority sentiment is not part of the on-disk format, so a model
    /// read from a file falls back to positive; callers that know the real
    /// majority override it at classification time.
    ///
    /// # Errors
    ///
    /// [`SentilistError::InvalidModel`] is returned when a block is truncated
    /// or a line does not match the format.
    pub fn read<R>(rdr: &mut R) -> Result<Self>
    where
        R: Read,
    {
        let mut entries = vec![];
        let mut lines = BufReader::new(rdr).lines();
        while let Some(line) = lines.next() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let feature = line
                .strip_prefix("Feature: ")
                .ok_or_else(|| {
                    SentilistError::invalid_model(format!("expected a feature line, got: {line}"))
                })?
                .to_string();
            let line = next_line(&mut lines)?;
            let score = line
                .strip_prefix("Log-likelihood: ")
                .ok_or_else(|| {
                    SentilistError::invalid_model(format!(
                        "expected a log-likelihood line, got: {line}"
                    ))
                })?
                .parse::<f64>()
                .map_err(|e| SentilistError::invalid_model(format!("invalid log-likelihood: {e}")))?;
            let line = next_line(&mut lines)?;
            let sentiment = line
                .strip_prefix("Sentiment: ")
                .ok_or_else(|| {
                    SentilistError::invalid_model(format!("expected a sentiment line, got: {line}"))
                })?
                .parse()?;
            entries.push(DecisionListEntry {
                feature,
                score,
                sentiment,
            });
        }
        Ok(Self {
            entries,
            majority: Label::Positive,
        })
    }
}

fn next_line<B>(lines: &mut std::io::Lines<B>) -> Result<String>
where
    B: BufRead,
{
    lines
        .next()
        .transpose()?
        .ok_or_else(|| SentilistError::invalid_model("truncated entry block"))
}
