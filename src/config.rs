//! Conversion settings.
//!
//! A [`ConverterConfig`] is built once and handed to a
//! [`Converter`](crate::Converter); nothing mutates it afterwards, so the same
//! value can drive sequential and parallel runs alike.
//!
//! # Example
//!
//! ```
//! use csvdoc::{Alignment, ConverterConfig};
//!
//! let cfg = ConverterConfig::default()
//!     .with_delimiter(';')
//!     .with_comment('#')
//!     .with_precision(2)
//!     .with_alignment(Alignment::Lenient);
//! assert!(cfg.validate().is_ok());
//! ```

use crate::error::ConvertError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of decimal digits kept on numeric fields.
pub const DEFAULT_PRECISION: u32 = 4;

/// Largest accepted precision. `10^308` is the last power of ten an `f64` holds.
pub const MAX_PRECISION: u32 = 308;

/// How a data row's width is matched against the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Rows must have exactly as many fields as the header; others are skipped
    /// and reported.
    #[default]
    Strict,
    /// Fields are paired by position; missing ones are left out and extra ones
    /// dropped.
    Lenient,
}

/// What an empty field turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyField {
    #[default]
    Null,
    Text,
}

/// Settings for one conversion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Pre-set field names. When absent (or empty) the first row is the header.
    pub header: Option<Vec<String>>,
    /// Decimal digits kept on numbers.
    pub precision: u32,
    /// Field separator.
    pub delimiter: char,
    /// Lines starting with this character are dropped by the tokenizer.
    pub comment: Option<char>,
    pub alignment: Alignment,
    pub empty_field: EmptyField,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            header: None,
            precision: DEFAULT_PRECISION,
            delimiter: ',',
            comment: None,
            alignment: Alignment::Strict,
            empty_field: EmptyField::Null,
        }
    }
}

impl ConverterConfig {
    /// Pre-set the field names; the first input row is then data.
    ///
    /// ```
    /// use csvdoc::{Converter, ConverterConfig, Value};
    ///
    /// let cfg = ConverterConfig::default().with_header(["x", "y"]);
    /// let out = Converter::with_config("1,2\n", cfg).parse()?;
    /// assert_eq!(out.documents[0]["y"], Value::Number(2.0));
    /// # Ok::<(), csvdoc::ConvertError>(())
    /// ```
    pub fn with_header<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Decimal digits kept on numbers, at most [`MAX_PRECISION`].
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Field separator; must be a single ASCII byte other than `"`.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Drop lines that start with `comment`.
    ///
    /// ```
    /// use csvdoc::{Converter, ConverterConfig};
    ///
    /// let cfg = ConverterConfig::default().with_comment('#');
    /// let out = Converter::with_config("#note\na\n1\n", cfg).parse()?;
    /// assert_eq!(out.header, vec!["a"]);
    /// # Ok::<(), csvdoc::ConvertError>(())
    /// ```
    pub fn with_comment(mut self, comment: char) -> Self {
        self.comment = Some(comment);
        self
    }

    /// How rows narrower or wider than the header are handled.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Whether an empty field becomes `null` or `""`.
    pub fn with_empty_field(mut self, empty_field: EmptyField) -> Self {
        self.empty_field = empty_field;
        self
    }

    /// The pre-set header, if one was given and is non-empty.
    pub fn preset_header(&self) -> Option<&[String]> {
        self.header.as_deref().filter(|h| !h.is_empty())
    }

    /// Check that the settings can drive a conversion.
    ///
    /// # Errors
    /// Returns [`ConvertError::InvalidConfig`] when either character is not a
    /// single ASCII byte, is a quote or line terminator, or when both are equal,
    /// and when the precision is above [`MAX_PRECISION`].
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.precision > MAX_PRECISION {
            return Err(ConvertError::InvalidConfig(format!(
                "precision {} is above the maximum of {MAX_PRECISION}",
                self.precision
            )));
        }
        check_marker("delimiter", self.delimiter)?;
        if let Some(comment) = self.comment {
            check_marker("comment", comment)?;
            if comment == self.delimiter {
                return Err(ConvertError::InvalidConfig(format!(
                    "comment marker {comment:?} equals the delimiter"
                )));
            }
        }
        Ok(())
    }

    /// Delimiter as the byte the tokenizer works with.
    pub(crate) fn delimiter_byte(&self) -> Result<u8, ConvertError> {
        check_marker("delimiter", self.delimiter)
    }

    pub(crate) fn comment_byte(&self) -> Result<Option<u8>, ConvertError> {
        self.comment.map(|c| check_marker("comment", c)).transpose()
    }

    /// Parse a config from JSON. Missing keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json).context("parse converter config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load a config from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("open {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("load config {}", path.display()))
    }
}

fn check_marker(name: &str, c: char) -> Result<u8, ConvertError> {
    if !c.is_ascii() {
        return Err(ConvertError::InvalidConfig(format!(
            "{name} {c:?} is not a single-byte ASCII character"
        )));
    }
    if matches!(c, '"' | '\r' | '\n') {
        return Err(ConvertError::InvalidConfig(format!(
            "{name} {c:?} is reserved"
        )));
    }
    Ok(c as u8)
}
