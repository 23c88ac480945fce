//! Splitting raw bytes into rows of string fields.
//!
//! The converter only depends on the [`Tokenize`] trait. [`CsvTokenizer`] is
//! the stock implementation on top of the `csv` crate; callers with their own
//! row source can plug in anything else.

use crate::config::ConverterConfig;
use crate::error::ConvertError;

/// One tokenized line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based line the record starts on.
    pub line: u64,
    /// Raw field values, leading whitespace already stripped.
    pub fields: Vec<String>,
}

impl Row {
    /// Build a row from anything yielding string-like fields.
    ///
    /// ```
    /// use csvdoc::Row;
    ///
    /// let row = Row::new(3, ["id", "0.5"]);
    /// assert_eq!(row.len(), 2);
    /// assert_eq!(row.fields[1], "0.5");
    /// ```
    pub fn new<I, S>(line: u64, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            line,
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of fields in the row.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True for a row with no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Turns a whole input buffer into ordered rows.
pub trait Tokenize {
    /// # Errors
    /// Returns [`ConvertError::Tokenize`] when the input is malformed. No rows
    /// are returned in that case.
    fn tokenize(&self, data: &[u8]) -> Result<Vec<Row>, ConvertError>;
}

/// `csv`-backed tokenizer.
///
/// * rows may have any number of fields
/// * `\n` and `\r\n` both end a row
/// * whitespace at the start of a field is stripped before quotes are looked
///   at, so `a, "b, c"` is two fields
/// * lines starting with the comment marker are dropped entirely
/// * a `"` inside an unquoted field, text after a closing quote and a quoted
///   field left open at the end of input are errors
///
/// ```
/// use csvdoc::{CsvTokenizer, Tokenize};
///
/// let rows = CsvTokenizer::default().tokenize(b"bob, \"Tokyo, Japan\"")?;
/// assert_eq!(rows[0].fields, vec!["bob", "Tokyo, Japan"]);
///
/// assert!(CsvTokenizer::default().tokenize(b"1,x\"y\"z").is_err());
/// # Ok::<(), csvdoc::ConvertError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvTokenizer {
    delimiter: u8,
    comment: Option<u8>,
}

impl Default for CsvTokenizer {
    fn default() -> Self {
        Self {
            delimiter: b',',
            comment: None,
        }
    }
}

/// Where the pre-scan is inside the current record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    RecordStart,
    FieldStart,
    Unquoted,
    Quoted,
    /// Just read a `"` inside a quoted field: either `""` or the closing quote.
    QuoteInQuoted,
    Comment,
}

impl CsvTokenizer {
    /// Build a tokenizer from the delimiter and comment marker of `config`.
    ///
    /// # Errors
    /// Returns [`ConvertError::InvalidConfig`] if the config does not validate.
    pub fn from_config(config: &ConverterConfig) -> Result<Self, ConvertError> {
        config.validate()?;
        Ok(Self {
            delimiter: config.delimiter_byte()?,
            comment: config.comment_byte()?,
        })
    }

    fn reader<'a>(&self, data: &'a [u8]) -> csv::Reader<&'a [u8]> {
        csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(data)
    }

    /// Strip leading field whitespace, blank out comment lines and reject
    /// malformed quoting. Every `\n` is kept, so line numbers reported by
    /// the `csv` reader still match the input.
    fn normalize(&self, data: &[u8]) -> Result<String, ConvertError> {
        let text = std::str::from_utf8(data).map_err(|e| {
            let line = data[..e.valid_up_to()]
                .iter()
                .filter(|&&b| b == b'\n')
                .count() as u64
                + 1;
            ConvertError::tokenize(Some(line), format!("invalid UTF-8: {e}"))
        })?;
        let delimiter = char::from(self.delimiter);
        let comment = self.comment.map(char::from);
        let is_eol = |c: char| c == '\r' || c == '\n';

        let mut out = String::with_capacity(text.len());
        let mut state = Scan::RecordStart;
        let mut line: u64 = 1;
        let mut quote_line = line;

        for c in text.chars() {
            match state {
                Scan::Comment => {
                    if c == '\n' {
                        out.push(c);
                        state = Scan::RecordStart;
                    }
                }
                Scan::RecordStart if Some(c) == comment => state = Scan::Comment,
                Scan::RecordStart | Scan::FieldStart => {
                    if c == '"' {
                        out.push(c);
                        quote_line = line;
                        state = Scan::Quoted;
                    } else if c == delimiter {
                        out.push(c);
                        state = Scan::FieldStart;
                    } else if is_eol(c) {
                        out.push(c);
                        state = Scan::RecordStart;
                    } else if c.is_whitespace() {
                        state = Scan::FieldStart;
                    } else {
                        out.push(c);
                        state = Scan::Unquoted;
                    }
                }
                Scan::Unquoted => {
                    if c == '"' {
                        return Err(ConvertError::tokenize(
                            Some(line),
                            "bare \" in non-quoted field",
                        ));
                    }
                    out.push(c);
                    if c == delimiter {
                        state = Scan::FieldStart;
                    } else if is_eol(c) {
                        state = Scan::RecordStart;
                    }
                }
                Scan::Quoted => {
                    out.push(c);
                    if c == '"' {
                        state = Scan::QuoteInQuoted;
                    }
                }
                Scan::QuoteInQuoted => {
                    if c == '"' {
                        state = Scan::Quoted;
                    } else if c == delimiter {
                        state = Scan::FieldStart;
                    } else if is_eol(c) {
                        state = Scan::RecordStart;
                    } else {
                        return Err(ConvertError::tokenize(
                            Some(line),
                            "extraneous \" in quoted field",
                        ));
                    }
                    out.push(c);
                }
            }
            if c == '\n' {
                line += 1;
            }
        }

        if state == Scan::Quoted {
            return Err(ConvertError::tokenize(
                Some(quote_line),
                "quoted field is never closed",
            ));
        }
        Ok(out)
    }
}

impl Tokenize for CsvTokenizer {
    fn tokenize(&self, data: &[u8]) -> Result<Vec<Row>, ConvertError> {
        let text = self.normalize(data)?;
        let mut rdr = self.reader(text.as_bytes());
        let mut rows = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            let line = rec.position().map(|p| p.line()).unwrap_or_default();
            let fields = rec.iter().map(str::to_string).collect();
            rows.push(Row { line, fields });
        }
        Ok(rows)
    }
}
