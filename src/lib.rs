//! # csvdoc
//!
//! Turns delimited text (CSV and friends) into a sequence of loosely-typed
//! key/value documents, ready to be serialized into a document format.
//!
//! ## Key Features
//!
//! - **Header handling** - take field names from the first row or pre-set them
//! - **Type inference** - every field becomes a boolean, number, null or string
//! - **Fixed-precision numbers** - numeric fields are rounded to a configured digit count
//! - **Strict or lenient alignment** - reject or tolerate rows of the wrong width
//! - **Partial results** - skipped rows are reported next to the documents that made it
//! - **File helpers** - gzip detection, glob expansion and JSON Lines output
//!
//! ## Quick Start
//!
//! ```
//! use csvdoc::*;
//!
//! let out = Converter::new("hiragana,katakana,romaji\ntrue,FALSE,na").parse()?;
//! let doc = &out.documents[0];
//! assert_eq!(doc["hiragana"], Value::Bool(true));
//! assert_eq!(doc["katakana"], Value::Bool(false));
//! assert_eq!(doc["romaji"], Value::Text("na".into()));
//! # Ok::<(), ConvertError>(())
//! ```
//!
//! ## Core Concepts
//!
//! ### Converter
//!
//! A [`Converter`] owns the raw bytes and an immutable [`ConverterConfig`].
//! [`Converter::parse`] tokenizes the whole input, settles the header and
//! converts every data row, in order.
//!
//! ### Type inference
//!
//! Each raw field is resolved by [`infer::infer_value`] in a fixed order:
//! 1. `true`/`false` in any case become [`Value::Bool`]
//! 2. anything a float parser accepts becomes [`Value::Number`], rounded with [`infer::round`]
//! 3. an empty field becomes [`Value::Null`] (or text, see [`EmptyField`])
//! 4. everything else is kept as [`Value::Text`]
//!
//! ### Alignment
//!
//! With [`Alignment::Strict`] (the default) a row must be exactly as wide as
//! the header. Rows that are not are dropped and reported as
//! [`ConvertError::FieldCountMismatch`] in [`Conversion::errors`]; the rest of
//! the input is still converted. [`Alignment::Lenient`] pairs fields by
//! position instead.
//!
//! ### Tokenizing
//!
//! Splitting bytes into rows sits behind the [`Tokenize`] trait.
//! [`CsvTokenizer`] (the `csv` crate) is used by default; a failure there is
//! fatal and yields no documents.
//!
//! ## Feature Flags
//!
//! - `io-jsonl` - JSON Lines output in [`io::jsonl`]
//! - `compression-gzip` - transparent gzip for file helpers
//! - `parallel-io` - [`Converter::parse_par`] and parallel JSONL writing
//!
//! ## Module Overview
//!
//! - [`converter`] - header resolution and row-to-document conversion
//! - [`infer`] - boolean detection, rounding and per-field inference
//! - [`config`] - conversion settings
//! - [`tokenizer`] - the tokenizer seam and its `csv` implementation
//! - [`value`] - [`Value`] and [`Document`]
//! - [`error`] - [`ConvertError`]
//! - [`io`] - file helpers

pub mod config;
pub mod converter;
pub mod error;
pub mod infer;
pub mod io;
pub mod tokenizer;
pub mod value;

pub use config::{Alignment, ConverterConfig, DEFAULT_PRECISION, EmptyField, MAX_PRECISION};
pub use converter::{Conversion, Converter, convert_row};
pub use error::ConvertError;
pub use infer::{infer_value, is_boolean_string, round};
pub use tokenizer::{CsvTokenizer, Row, Tokenize};
pub use value::{Document, Value};

pub use io::csv::read_documents;
pub use io::glob::read_documents_glob;

#[cfg(feature = "io-jsonl")]
pub use io::jsonl::{read_jsonl, write_jsonl};

#[cfg(all(feature = "io-jsonl", feature = "parallel-io"))]
pub use io::jsonl::write_jsonl_par;
