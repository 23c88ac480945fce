//! Convert a delimited file into JSON Lines.
//!
//! ```text
//! cargo run --example csv_to_jsonl -- input.csv output.jsonl [config.json]
//! ```
//!
//! Skipped rows are listed on stderr; the run still writes every document
//! that converted cleanly.

use anyhow::{Context, Result};
use csvdoc::{ConverterConfig, read_documents, write_jsonl};
use std::env;

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let input = args.next().context("missing input path")?;
    let output = args.next().context("missing output path")?;
    let config = match args.next() {
        Some(path) => ConverterConfig::from_json_file(path)?,
        None => ConverterConfig::default(),
    };

    let out = read_documents(&input, &config)?;
    for err in &out.errors {
        eprintln!("skipped: {err}");
    }
    let n = write_jsonl(&output, &out.documents)?;
    println!(
        "{n} documents written to {output} ({} rows skipped)",
        out.errors.len()
    );
    Ok(())
}
