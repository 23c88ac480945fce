//! Errors raised while turning delimited text into documents.

use serde::Serialize;
use std::fmt;

/// Failure kinds of a conversion run.
///
/// [`ConvertError::Tokenize`] and [`ConvertError::InvalidConfig`] abort the
/// run. [`ConvertError::FieldCountMismatch`] only drops the offending row and
/// is reported through [`Conversion::errors`](crate::Conversion::errors).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConvertError {
    /// The input could not be split into rows.
    Tokenize {
        /// 1-based source line, when the tokenizer reports one.
        line: Option<u64>,
        message: String,
    },
    /// A data row's field count differs from the header's (strict alignment).
    FieldCountMismatch {
        /// 1-based source line of the row.
        line: u64,
        expected: usize,
        found: usize,
    },
    /// The configuration cannot drive a tokenizer.
    InvalidConfig(String),
}

impl ConvertError {
    pub fn tokenize<S: Into<String>>(line: Option<u64>, message: S) -> Self {
        Self::Tokenize {
            line,
            message: message.into(),
        }
    }

    /// Whether the run can continue after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::FieldCountMismatch { .. })
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tokenize {
                line: Some(line),
                message,
            } => write!(f, "[CSV] tokenize error at line {line}: {message}"),
            Self::Tokenize {
                line: None,
                message,
            } => write!(f, "[CSV] tokenize error: {message}"),
            Self::FieldCountMismatch {
                line,
                expected,
                found,
            } => write!(
                f,
                "[CSV] mismatching header and item count at line {line}: expected {expected} fields, found {found}"
            ),
            Self::InvalidConfig(msg) => write!(f, "[CSV] invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}

impl From<csv::Error> for ConvertError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line());
        Self::tokenize(line, err.to_string())
    }
}
