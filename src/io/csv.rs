//! Converting delimited files on disk.
//!
//! The whole file is read into memory (decompressing if needed) and handed to
//! a [`Converter`]; there is no incremental parsing.

use crate::converter::{Conversion, Converter};
use crate::config::ConverterConfig;
use crate::io::compression::auto_detect_reader;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read the raw bytes of `path`, transparently decompressing.
pub fn read_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut rdr = auto_detect_reader(f, path)
        .with_context(|| format!("setup decompression for {}", path.display()))?;
    let mut buf = Vec::new();
    rdr.read_to_end(&mut buf)
        .with_context(|| format!("read {}", path.display()))?;
    Ok(buf)
}

/// Convert the file at `path` into documents.
///
/// # Errors
/// Returns an error if the file cannot be read, the configuration is invalid
/// or the content cannot be tokenized. Skipped rows are reported through
/// [`Conversion::errors`], not as an `Err`.
pub fn read_documents(path: impl AsRef<Path>, config: &ConverterConfig) -> Result<Conversion> {
    let path = path.as_ref();
    let data = read_bytes(path)?;
    let out = Converter::with_config(data, config.clone())
        .parse()
        .with_context(|| format!("convert {}", path.display()))?;
    Ok(out)
}
