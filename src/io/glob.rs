//! Converting every file that matches a glob pattern.
//!
//! ```no_run
//! use csvdoc::ConverterConfig;
//! use csvdoc::io::glob::read_documents_glob;
//!
//! let runs = read_documents_glob("exports/*.csv", &ConverterConfig::default())?;
//! for (path, out) in runs {
//!     println!("{}: {} documents", path.display(), out.documents.len());
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::config::ConverterConfig;
use crate::converter::Conversion;
use crate::io::csv::read_documents;
use anyhow::{Context, Result, bail};
use glob::glob;
use std::path::PathBuf;

/// Convert each regular file matching `pattern`, in path order.
///
/// Each file is an independent run with its own header. A pattern that
/// matches no file is an error, and the first file that fails to read or
/// tokenize aborts the whole call.
pub fn read_documents_glob(
    pattern: &str,
    config: &ConverterConfig,
) -> Result<Vec<(PathBuf, Conversion)>> {
    let mut files = glob(pattern)
        .with_context(|| format!("bad glob {pattern:?}"))?
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("walk glob {pattern:?}"))?;
    files.retain(|p| p.is_file());
    files.sort();
    if files.is_empty() {
        bail!("{pattern:?} matches no file");
    }

    let mut runs = Vec::with_capacity(files.len());
    for path in files {
        let out = read_documents(&path, config)?;
        runs.push((path, out));
    }
    Ok(runs)
}
