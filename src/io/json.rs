//! JSON file I/O and text-to-text conversion for record batches.
//!
//! JSON is the pass-through encoding of the record trees themselves: a
//! batch is a JSON array of objects. Output is pretty-printed, and map
//! keys come out sorted because [`Value`] maps iterate in key order.

use crate::table::{decode_table, encode_table};
use crate::value::Value;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a JSON file containing an array of records.
///
/// A leading UTF-8 BOM is tolerated.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a JSON array of
/// record values, with the file path as context.
pub fn read_records_file(path: impl AsRef<Path>) -> Result<Vec<Value>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("open {}", path.display()))?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    let records: Vec<Value> = serde_json::from_str(text)
        .with_context(|| format!("parse JSON records in {}", path.display()))?;
    Ok(records)
}

/// Write a batch of records as a pretty-printed JSON array.
///
/// Creates parent directories if they don't exist.
///
/// # Returns
/// The number of records written (i.e., `records.len()`).
///
/// # Errors
/// Returns an error if the file/dirs cannot be created or serialization
/// fails.
pub fn write_records_file(path: impl AsRef<Path>, records: &[Value]) -> Result<usize> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("mkdir -p {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(records)
        .with_context(|| format!("serialize records to {}", path.display()))?;
    fs::write(path, json).with_context(|| format!("create {}", path.display()))?;
    Ok(records.len())
}

/// Convert tabular text to a pretty-printed JSON array of records.
///
/// # Errors
/// Returns an error if the tabular text fails to decode.
pub fn table_to_json(text: &str) -> Result<String> {
    let records = decode_table(text).context("decode table")?;
    serde_json::to_string_pretty(&records).context("serialize records")
}

/// Convert a JSON array of records to tabular text.
///
/// # Errors
/// Returns an error if the text is not a JSON array of record values or a
/// record is not a map.
pub fn json_to_table(text: &str) -> Result<String> {
    let records: Vec<Value> = serde_json::from_str(text).context("parse JSON records")?;
    encode_table(&records).context("encode table")
}
