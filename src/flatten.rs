//! Recursive flattening of one record into its leaf paths.
//!
//! Maps contribute `.name` steps, lists contribute `[index]` steps, and
//! every scalar leaf (including explicit nulls) lands in the row under its
//! canonical path string. Empty lists and empty maps contribute nothing,
//! which is an accepted round-trip loss.

use crate::error::{CodecError, CodecResult};
use crate::value::Value;
use std::collections::BTreeMap;

/// The leaf-only path-to-scalar mapping derived from exactly one record.
///
/// Paths iterate in sorted order; the row lives only for the duration of
/// one encode or decode call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlatRow {
    values: BTreeMap<String, Value>,
}

impl FlatRow {
    /// The leaf paths of this row, lexicographically sorted.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// The scalar recorded at `path`, if the record has that leaf.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Value> {
        self.values.get(path)
    }

    /// Iterate `(path, scalar)` pairs in sorted path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of leaves in this row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the record had no leaves at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Flatten one record into its [`FlatRow`].
///
/// # Errors
/// Returns [`CodecError::TypeMismatch`] when `record` is not a map; only
/// map-rooted trees have addressable leaves.
///
/// # Example
///
/// ```
/// use treetab::{flatten, Value};
///
/// let record: Value = serde_json::from_str(r#"{"a":{"b":[1,2]},"c":true}"#)?;
/// let row = flatten(&record)?;
/// assert_eq!(row.paths().collect::<Vec<_>>(), vec!["a.b[0]", "a.b[1]", "c"]);
/// # anyhow::Result::<()>::Ok(())
/// ```
pub fn flatten(record: &Value) -> CodecResult<FlatRow> {
    let map = record.as_map().ok_or_else(|| {
        CodecError::mismatch("(root)", format!("record must be a map, found {}", record.kind()))
    })?;
    let mut row = FlatRow::default();
    flatten_map("", map, &mut row);
    Ok(row)
}

fn walk(path: String, value: &Value, row: &mut FlatRow) {
    match value {
        Value::Map(map) => flatten_map(&path, map, row),
        Value::List(list) => flatten_list(&path, list, row),
        scalar => {
            row.values.insert(path, scalar.clone());
        }
    }
}

fn flatten_map(prefix: &str, map: &BTreeMap<String, Value>, row: &mut FlatRow) {
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        walk(path, value, row);
    }
}

fn flatten_list(prefix: &str, list: &[Value], row: &mut FlatRow) {
    for (idx, value) in list.iter().enumerate() {
        walk(format!("{prefix}[{idx}]"), value, row);
    }
}
