//! Definition of errors.

use std::error::Error;
use std::fmt;

pub type Result<T, E = SentilistError> = std::result::Result<T, E>;

#[derive(Debug)]
pub enum SentilistError {
    InvalidRecord(InvalidRecordError),
    InvalidModel(InvalidModelError),
    InvalidArgument(InvalidArgumentError),
    IoError(std::io::Error),
}

impl SentilistError {
    pub(crate) fn invalid_record<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidRecord(InvalidRecordError { msg: msg.into() })
    }

    pub(crate) fn invalid_model<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidModel(InvalidModelError { msg: msg.into() })
    }

    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }
}

impl fmt::Display for SentilistError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidRecord(e) => e.fmt(f),
            Self::InvalidModel(e) => e.fmt(f),
            Self::InvalidArgument(e) => e.fmt(f),
            Self::IoError(e) => e.fmt(f),
        }
    }
}

impl Error for SentilistError {}

/// Error used when a corpus record is malformed.
#[derive(Debug)]
pub struct InvalidRecordError {
    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidRecordError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidRecordError: {}", self.msg)
    }
}

impl Error for InvalidRecordError {}

/// Error used when the model file is invalid.
#[derive(Debug)]
pub struct InvalidModelError {
    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidModelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidModelError: {}", self.msg)
    }
}

impl Error for InvalidModelError {}

/// Error used when the argument is invalid.
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// Name of the argument.
    pub(crate) arg: &'static str,

    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

impl From<std::io::Error> for SentilistError {
    fn from(error: std::io::Error) -> Self {
        Self::IoError(error)
    }
}
