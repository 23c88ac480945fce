//! File-level helpers around the converter.
//!
//! - [`csv`]: read a delimited file (optionally gzip-compressed) into documents
//! - [`glob`]: convert every file matching a pattern
//! - [`jsonl`]: write documents out as JSON Lines (feature `io-jsonl`)
//! - [`compression`]: transparent codec detection shared by the above

pub mod compression;
pub mod csv;
pub mod glob;

#[cfg_attr(docsrs, doc(cfg(feature = "io-jsonl")))]
#[cfg(feature = "io-jsonl")]
pub mod jsonl;
