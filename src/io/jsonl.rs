//! JSON Lines output (and read-back) for documents.
//!
//! One document per line, keys in sorted order. Paths ending in `.gz` are
//! compressed on write and decompressed on read.

use crate::io::compression::{auto_detect_reader, auto_detect_writer};
use crate::value::Document;
use anyhow::{Context, Result};
use std::fs::{File, create_dir_all};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Render documents as a JSONL string.
pub fn to_jsonl_string(docs: &[Document]) -> Result<String> {
    let mut out = String::new();
    for (i, doc) in docs.iter().enumerate() {
        let line =
            serde_json::to_string(doc).with_context(|| format!("serialize document #{i}"))?;
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}

fn create_output(path: &Path) -> Result<Box<dyn Write>> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent).with_context(|| format!("mkdir -p {}", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    auto_detect_writer(f, path).with_context(|| format!("setup compression for {}", path.display()))
}

/// Write documents to `path`, one JSON object per line.
///
/// Parent directories are created as needed.
///
/// # Returns
/// The number of documents written.
pub fn write_jsonl(path: impl AsRef<Path>, docs: &[Document]) -> Result<usize> {
    let path = path.as_ref();
    let mut w = create_output(path)?;
    for (i, doc) in docs.iter().enumerate() {
        serde_json::to_writer(&mut w, doc)
            .with_context(|| format!("serialize document #{} to {}", i, path.display()))?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(docs.len())
}

/// Parallel [`write_jsonl`] with deterministic line order.
///
/// Contiguous shards are serialized into memory on the rayon pool, then
/// written out in shard order.
///
/// * `shards`: if `None`, defaults to `2 * num_cpus`, clamped to `[1, n]`.
#[cfg(feature = "parallel-io")]
pub fn write_jsonl_par(
    path: impl AsRef<Path>,
    docs: &[Document],
    shards: Option<usize>,
) -> Result<usize> {
    use rayon::prelude::*;

    let path = path.as_ref();
    let n = docs.len();
    if n == 0 {
        let mut w = create_output(path)?;
        w.flush()?;
        return Ok(0);
    }
    let shards = shards
        .unwrap_or_else(|| 2 * num_cpus::get().max(2))
        .clamp(1, n);
    let chunk = n.div_ceil(shards);

    let buffers: Vec<Vec<u8>> = docs
        .par_chunks(chunk)
        .enumerate()
        .map(|(idx, slice)| {
            let mut buf = Vec::with_capacity(slice.len() * 64);
            for (j, doc) in slice.iter().enumerate() {
                serde_json::to_writer(&mut buf, doc)
                    .with_context(|| format!("serialize document #{}", idx * chunk + j))?;
                buf.push(b'\n');
            }
            Ok::<_, anyhow::Error>(buf)
        })
        .collect::<Result<_>>()?;

    let mut w = create_output(path)?;
    for buf in &buffers {
        w.write_all(buf)?;
    }
    w.flush()?;
    Ok(n)
}

/// Read documents back from a JSONL file. Blank lines are skipped.
pub fn read_jsonl(path: impl AsRef<Path>) -> Result<Vec<Document>> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let rdr = auto_detect_reader(f, path)
        .with_context(|| format!("setup decompression for {}", path.display()))?;
    let mut out = Vec::new();
    for (i, line) in BufReader::new(rdr).lines().enumerate() {
        let line = line.with_context(|| format!("read line {} in {}", i + 1, path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        let doc: Document = serde_json::from_str(&line).with_context(|| {
            format!("parse JSONL line {} in {}: {}", i + 1, path.display(), line)
        })?;
        out.push(doc);
    }
    Ok(out)
}
