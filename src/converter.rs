//! Row-to-document conversion.
//!
//! A [`Converter`] owns the raw input and an immutable [`ConverterConfig`].
//! [`Converter::parse`] tokenizes everything up front, settles the header once
//! and then turns every remaining row into a [`Document`]:
//!
//! 1. a pre-set header is used as-is and every row is data;
//! 2. otherwise the first row becomes the header and is not emitted;
//! 3. rows that do not line up with the header (strict alignment) are skipped
//!    and reported in [`Conversion::errors`].
//!
//! # Example
//!
//! ```
//! use csvdoc::{Converter, Value};
//!
//! let out = Converter::new("name,score\nalice,9.87654\n").parse()?;
//! assert_eq!(out.documents.len(), 1);
//! assert_eq!(out.documents[0]["score"], Value::Number(9.8765));
//! # Ok::<(), csvdoc::ConvertError>(())
//! ```

use crate::config::{Alignment, ConverterConfig};
use crate::error::ConvertError;
use crate::infer::infer_value;
use crate::tokenizer::{CsvTokenizer, Row, Tokenize};
use crate::value::Document;
use serde::Serialize;
use tracing::{debug, error, warn};

/// Converts one in-memory input into documents.
#[derive(Debug, Clone)]
pub struct Converter {
    data: Vec<u8>,
    config: ConverterConfig,
}

/// Outcome of a run that got past tokenizing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Conversion {
    /// Header used for the run (pre-set or taken from the first row).
    pub header: Vec<String>,
    /// One document per accepted data row, in input order.
    pub documents: Vec<Document>,
    /// Rows that were skipped, in input order.
    pub errors: Vec<ConvertError>,
}

impl Conversion {
    /// `true` when no row was skipped.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// The last skipped row's error, matching a single-error view of the run.
    ///
    /// ```
    /// use csvdoc::{ConvertError, Converter};
    ///
    /// let out = Converter::new("a,b\n1\n2,3\n4\n").parse()?;
    /// assert!(matches!(
    ///     out.last_error(),
    ///     Some(ConvertError::FieldCountMismatch { line: 4, .. })
    /// ));
    /// # Ok::<(), ConvertError>(())
    /// ```
    pub fn last_error(&self) -> Option<&ConvertError> {
        self.errors.last()
    }

    /// Documents, or the last row error if any row was skipped.
    pub fn into_documents(mut self) -> Result<Vec<Document>, ConvertError> {
        match self.errors.pop() {
            Some(err) => Err(err),
            None => Ok(self.documents),
        }
    }
}

impl Converter {
    /// Converter over `data` with the default configuration.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self::with_config(data, ConverterConfig::default())
    }

    /// Converter over `data` with an explicit configuration. The config is
    /// checked when parsing starts, not here.
    pub fn with_config(data: impl Into<Vec<u8>>, config: ConverterConfig) -> Self {
        Self {
            data: data.into(),
            config,
        }
    }

    /// The configuration this converter runs with.
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// The raw input bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Tokenize with [`CsvTokenizer`] and convert every data row.
    ///
    /// # Errors
    /// Returns [`ConvertError::InvalidConfig`] or [`ConvertError::Tokenize`];
    /// either way no documents are produced. Mismatched rows are not errors at
    /// this level, see [`Conversion::errors`].
    pub fn parse(&self) -> Result<Conversion, ConvertError> {
        let tokenizer = CsvTokenizer::from_config(&self.config)?;
        self.parse_with(&tokenizer)
    }

    /// Same as [`parse`](Self::parse) with a caller-supplied tokenizer.
    pub fn parse_with<T: Tokenize + ?Sized>(
        &self,
        tokenizer: &T,
    ) -> Result<Conversion, ConvertError> {
        let rows = self.tokenize(tokenizer)?;
        let (header, rows) = self.resolve_header(rows);
        let results: Vec<_> = rows
            .iter()
            .map(|row| convert_row(&header, row, &self.config))
            .collect();
        Ok(self.assemble(header, results))
    }

    /// Parallel variant of [`parse`](Self::parse).
    ///
    /// Rows are independent once the header is fixed, so they are converted on
    /// the rayon pool and gathered back in input order. The result is identical
    /// to the sequential one.
    #[cfg(feature = "parallel-io")]
    pub fn parse_par(&self) -> Result<Conversion, ConvertError> {
        use rayon::prelude::*;

        let tokenizer = CsvTokenizer::from_config(&self.config)?;
        let rows = self.tokenize(&tokenizer)?;
        let (header, rows) = self.resolve_header(rows);
        let min_len = (rows.len() / (2 * num_cpus::get().max(2))).max(1);
        let results: Vec<_> = rows
            .par_iter()
            .with_min_len(min_len)
            .map(|row| convert_row(&header, row, &self.config))
            .collect();
        Ok(self.assemble(header, results))
    }

    fn tokenize<T: Tokenize + ?Sized>(&self, tokenizer: &T) -> Result<Vec<Row>, ConvertError> {
        tokenizer.tokenize(&self.data).inspect_err(|err| {
            error!(error = %err, bytes = self.data.len(), "tokenizing input failed");
        })
    }

    /// Split off the header row unless one was pre-set. Decided once per run.
    fn resolve_header(&self, rows: Vec<Row>) -> (Vec<String>, Vec<Row>) {
        if let Some(header) = self.config.preset_header() {
            debug!(fields = header.len(), "using pre-set header");
            return (header.to_vec(), rows);
        }
        let mut rows = rows.into_iter();
        match rows.next() {
            Some(first) => {
                debug!(
                    fields = first.len(),
                    line = first.line,
                    "header taken from first row"
                );
                (first.fields, rows.collect())
            }
            None => (Vec::new(), Vec::new()),
        }
    }

    fn assemble<I>(&self, header: Vec<String>, results: I) -> Conversion
    where
        I: IntoIterator<Item = Result<Document, ConvertError>>,
    {
        let mut out = Conversion {
            header,
            ..Conversion::default()
        };
        for res in results {
            match res {
                Ok(doc) => out.documents.push(doc),
                Err(err) => {
                    warn!(error = %err, "skipping row");
                    out.errors.push(err);
                }
            }
        }
        debug!(
            documents = out.documents.len(),
            skipped = out.errors.len(),
            "conversion finished"
        );
        out
    }
}

/// Convert one row against `header`.
///
/// Under [`Alignment::Strict`] the row must be exactly as wide as the header.
/// Under [`Alignment::Lenient`] fields pair up by position: header names with
/// no field are left out and fields past the header are dropped.
///
/// # Errors
/// Returns [`ConvertError::FieldCountMismatch`] for a misaligned row in strict
/// mode.
pub fn convert_row(
    header: &[String],
    row: &Row,
    config: &ConverterConfig,
) -> Result<Document, ConvertError> {
    if config.alignment == Alignment::Strict && row.len() != header.len() {
        return Err(ConvertError::FieldCountMismatch {
            line: row.line,
            expected: header.len(),
            found: row.len(),
        });
    }
    Ok(header
        .iter()
        .zip(&row.fields)
        .map(|(name, raw)| (name.clone(), infer_value(raw, config)))
        .collect())
}
