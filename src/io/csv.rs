//! CSV file I/O for record batches.

use crate::table::{decode_table, encode_table};
use crate::value::Value;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a CSV file and decode it into a batch of records.
///
/// A leading UTF-8 BOM (as written by some spreadsheet tools on Windows)
/// is tolerated.
///
/// # Errors
/// Returns an error if the file cannot be read or the text fails to
/// decode; both carry the file path as context.
pub fn read_table_file(path: impl AsRef<Path>) -> Result<Vec<Value>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("open {}", path.display()))?;
    let records =
        decode_table(&text).with_context(|| format!("decode table in {}", path.display()))?;
    Ok(records)
}

/// Encode a batch of records and write it as a CSV file.
///
/// Creates parent directories if they don't exist.
///
/// # Returns
/// The number of records written (i.e., `records.len()`).
///
/// # Errors
/// Returns an error if a record is not a map or the file/dirs cannot be
/// created.
pub fn write_table_file(path: impl AsRef<Path>, records: &[Value]) -> Result<usize> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("mkdir -p {}", parent.display()))?;
    }
    let text = encode_table(records).context("encode table")?;
    fs::write(path, text).with_context(|| format!("create {}", path.display()))?;
    Ok(records.len())
}

/// Like [`write_table_file`], but flattens records in parallel.
///
/// # Errors
/// See [`write_table_file`].
///
/// # Feature
/// Requires the `parallel` feature.
#[cfg(feature = "parallel")]
pub fn write_table_file_par(path: impl AsRef<Path>, records: &[Value]) -> Result<usize> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("mkdir -p {}", parent.display()))?;
    }
    let text = crate::table::encode_table_par(records).context("encode table")?;
    fs::write(path, text).with_context(|| format!("create {}", path.display()))?;
    Ok(records.len())
}
