//! Per-column type inference and header type annotations.
//!
//! Encoding scans every row's value for a column: if all of them are
//! integers the column is declared `(int)`, if all are booleans `(bool)`,
//! otherwise the column stays untyped and its values travel as raw text.
//! Rows missing the column are skipped and explicit nulls neither confirm
//! nor deny a classification.
//!
//! Decoding strips the suffix to recover the bare path and coerces cells
//! accordingly. `(str)` is accepted as an alias for untyped but never
//! emitted.

use crate::error::{CodecError, CodecResult};
use crate::flatten::FlatRow;
use crate::value::Value;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)\((.*)\)$").expect("valid annotation regex"));

/// The declared scalar kind of one column, batch-scoped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnType {
    /// Every observed value was an integer.
    Int,
    /// Every observed value was a boolean.
    Bool,
    /// Mixed or string-bearing column; cells travel as raw text.
    Untyped,
}

impl ColumnType {
    /// Render the annotated header cell for a bare column path.
    #[must_use]
    pub fn annotate(&self, path: &str) -> String {
        match self {
            ColumnType::Int => format!("{path}(int)"),
            ColumnType::Bool => format!("{path}(bool)"),
            ColumnType::Untyped => path.to_string(),
        }
    }

    /// Coerce one already-trimmed, non-sentinel cell to its scalar.
    ///
    /// # Errors
    /// Returns [`CodecError::MalformedRow`] when an `(int)` cell does not
    /// parse as a base-10 integer. Boolean cells never fail: `true` in any
    /// case is true, anything else is false.
    pub fn coerce(&self, column: &str, cell: &str) -> CodecResult<Value> {
        match self {
            ColumnType::Int => cell
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| CodecError::MalformedRow {
                    column: column.to_string(),
                    cell: cell.to_string(),
                }),
            ColumnType::Bool => Ok(Value::Bool(cell.eq_ignore_ascii_case("true"))),
            ColumnType::Untyped => Ok(Value::Str(cell.to_string())),
        }
    }
}

/// Split a header cell into its bare column path and declared type.
///
/// Cells without a parenthesized suffix are untyped.
///
/// # Errors
/// Returns [`CodecError::UnsupportedType`] for a suffix other than `int`,
/// `bool`, or `str`.
pub fn parse_annotated(cell: &str) -> CodecResult<(&str, ColumnType)> {
    let Some(caps) = ANNOTATION.captures(cell) else {
        return Ok((cell, ColumnType::Untyped));
    };
    let ty = match &caps[2] {
        "int" => ColumnType::Int,
        "bool" => ColumnType::Bool,
        "str" => ColumnType::Untyped,
        other => {
            return Err(CodecError::UnsupportedType {
                suffix: other.to_string(),
            });
        }
    };
    let bare = caps.get(1).map_or("", |m| m.as_str());
    Ok((bare, ty))
}

// What the batch has shown for a column so far.
enum Observed {
    Unseen,
    Int,
    Bool,
    Mixed,
}

impl Observed {
    fn note(&mut self, value: &Value) {
        let seen = match value {
            Value::Null => return,
            Value::Int(_) => Observed::Int,
            Value::Bool(_) => Observed::Bool,
            _ => Observed::Mixed,
        };
        *self = match (&*self, seen) {
            (Observed::Unseen, seen) => seen,
            (Observed::Int, Observed::Int) => Observed::Int,
            (Observed::Bool, Observed::Bool) => Observed::Bool,
            _ => Observed::Mixed,
        };
    }
}

/// Classify every column observed across a batch of flattened rows.
///
/// The result holds one entry per distinct leaf path; columns that never
/// showed a consistent integer or boolean value come back
/// [`ColumnType::Untyped`].
///
/// # Example
///
/// ```
/// use treetab::{flatten, infer_column_types, ColumnType, Value};
///
/// let a: Value = serde_json::from_str(r#"{"n": 1, "s": "one"}"#)?;
/// let b: Value = serde_json::from_str(r#"{"n": 2, "s": 2}"#)?;
/// let rows = vec![flatten(&a)?, flatten(&b)?];
///
/// let types = infer_column_types(&rows);
/// assert_eq!(types["n"], ColumnType::Int);
/// assert_eq!(types["s"], ColumnType::Untyped);
/// # anyhow::Result::<()>::Ok(())
/// ```
#[must_use]
pub fn infer_column_types(rows: &[FlatRow]) -> BTreeMap<String, ColumnType> {
    let mut observed: BTreeMap<String, Observed> = BTreeMap::new();
    for row in rows {
        for (path, value) in row.iter() {
            observed
                .entry(path.to_string())
                .or_insert(Observed::Unseen)
                .note(value);
        }
    }
    observed
        .into_iter()
        .map(|(path, state)| {
            let ty = match state {
                Observed::Int => ColumnType::Int,
                Observed::Bool => ColumnType::Bool,
                Observed::Unseen | Observed::Mixed => ColumnType::Untyped,
            };
            (path, ty)
        })
        .collect()
}
