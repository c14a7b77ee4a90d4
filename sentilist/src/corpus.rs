//! Tagged corpus records and their parser.

use std::fmt;
use std::str::FromStr;

use crate::errors::{Result, SentilistError};

/// Sentiment label.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Label {
    Negative,
    Positive,
}

impl Label {
    /// Returns the label as the literal used in corpora and answer lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Negative => "negative",
            Self::Positive => "positive",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = SentilistError;

    fn from_str(label: &str) -> Result<Self> {
        match label {
            "negative" => Ok(Self::Negative),
            "positive" => Ok(Self::Positive),
            _ => Err(SentilistError::invalid_argument(
                "label",
                format!("unknown sentiment: {label}"),
            )),
        }
    }
}

/// A single corpus record.
///
/// Training records carry a gold label; test records do not. The raw text is
/// stored as found in the record and is normalized by the caller.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Instance {
    id: String,
    label: Option<Label>,
    text: String,
}

impl Instance {
    /// Gets the instance identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Gets the gold label, if the record carried one.
    pub fn label(&self) -> Option<Label> {
        self.label
    }

    /// Gets the raw context text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Parses a whole tagged corpus into instances.
///
/// Records are delimited by the `</instance>` end marker. Each record must
/// carry an `instance id="..."` attribute and a `<context>` block; training
/// records additionally carry a `sentiment="..."` attribute.
///
/// # Errors
///
/// [`SentilistError::InvalidRecord`] is returned when a record is missing its
/// id or context block, and [`SentilistError::InvalidArgument`] when a
/// sentiment value is outside {negative, positive}. Parsing is fail-fast: a
/// malformed record aborts the whole corpus rather than being skipped.
pub fn parse_corpus(data: &str) -> Result<Vec<Instance>> {
    let mut instances = vec![];
    for chunk in data.split("</instance>") {
        if !chunk.contains("<instance") {
            continue;
        }
        instances.push(parse_record(chunk)?);
    }
    Ok(instances)
}

fn parse_record(chunk: &str) -> Result<Instance> {
    let id = attribute(chunk, "instance id")
        .ok_or_else(|| SentilistError::invalid_record("record has no instance id"))?
        .to_string();
    let label = match attribute(chunk, "sentiment") {
        Some(value) => Some(value.parse()?),
        None => None,
    };
    let text = context_block(chunk).ok_or_else(|| {
        SentilistError::invalid_record(format!("instance {id} has no context block"))
    })?;
    Ok(Instance {
        id,
        label,
        text: text.trim().to_string(),
    })
}

fn attribute<'a>(chunk: &'a str, name: &str) -> Option<&'a str> {
    let start = chunk.find(&format!("{name}=\""))? + name.len() + 2;
    let len = chunk[start..].find('"')?;
    Some(&chunk[start..start + len])
}

fn context_block(chunk: &str) -> Option<&str> {
    let start = chunk.find("<context>")? + "<context>".len();
    let len = chunk[start..].find("</context>")?;
    Some(&chunk[start..start + len])
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: &str = "\
<instance id=\"623414021\">
sentiment=\"negative\"
<context>
Worst day ever :(
</context>
</instance>

<instance id=\"623414022\">
sentiment=\"positive\"
<context>
best day ever :)
</context>
</instance>
";

    #[test]
    fn test_parse_corpus_training() {
        let instances = parse_corpus(CORPUS).unwrap();

        assert_eq!(2, instances.len());
        assert_eq!("623414021", instances[0].id());
        assert_eq!(Some(Label::Negative), instances[0].label());
        assert_eq!("Worst day ever :(", instances[0].text());
        assert_eq!(Some(Label::Positive), instances[1].label());
    }

    #[test]
    fn test_parse_corpus_test_records_have_no_label() {
        let corpus = "<instance id=\"42\">\n<context>\nno tag here\n</context>\n</instance>\n";
        let instances = parse_corpus(corpus).unwrap();

        assert_eq!(1, instances.len());
        assert_eq!(None, instances[0].label());
        assert_eq!("no tag here", instances[0].text());
    }

    #[test]
    fn test_parse_corpus_skips_trailing_noise() {
        let corpus = "<instance id=\"42\">\n<context>\nhello there\n</context>\n</instance>\n\n\n";
        let instances = parse_corpus(corpus).unwrap();

        assert_eq!(1, instances.len());
    }

    #[test]
    fn test_parse_corpus_missing_id() {
        let corpus = "<instance>\n<context>\nhello there\n</context>\n</instance>\n";
        let result = parse_corpus(corpus);

        assert!(result.is_err());
    }

    #[test]
    fn test_parse_corpus_missing_context() {
        let corpus = "<instance id=\"42\">\nsentiment=\"negative\"\n</instance>\n";
        let result = parse_corpus(corpus);

        assert!(result.is_err());
    }

    #[test]
    fn test_parse_corpus_unknown_label() {
        let corpus =
            "<instance id=\"42\">\nsentiment=\"neutral\"\n<context>\nmeh\n</context>\n</instance>\n";
        let result = parse_corpus(corpus);

        assert!(result.is_err());
    }

    #[test]
    fn test_label_round_trip() {
        assert_eq!(Label::Negative, "negative".parse().unwrap());
        assert_eq!(Label::Positive, "positive".parse().unwrap());
        assert_eq!("negative", Label::Negative.to_string());
        assert!("Positive".parse::<Label>().is_err());
    }
}
