//! Path-addressed deep mutation with auto-vivification.
//!
//! [`set_at_path`] walks a [`Path`] into a record, creating intermediate
//! containers as needed, and assigns the value at the terminal segment.
//! The container kind created at each step is decided by looking ahead at
//! the *next* segment: an index means a list, a name means a map.
//!
//! Guarantees (and the tests that pin them):
//! - Re-applying an identical `(path, value)` pair is idempotent.
//! - Writing a higher index only pads with nulls, never truncates or
//!   reorders existing elements.
//! - Leaf paths sharing a prefix merge into the same child container
//!   (`b[0].cat` then `b[0].dog` yields one map under `b[0]`).

use crate::error::{CodecError, CodecResult};
use crate::path::{Path, Segment};
use crate::value::Value;

/// Set `value` at `path` inside `root`, mutating `root` in place.
///
/// `root` must be a [`Value::Map`]; intermediate lists and maps along the
/// path are created on demand, and list gaps are padded with `Null`.
///
/// # Errors
/// Returns [`CodecError::TypeMismatch`] when an existing value at a
/// position the path must descend through is a scalar, or a container of
/// the wrong kind for the next segment.
///
/// # Example
///
/// ```
/// use treetab::{set_at_path, Path, Value};
///
/// let mut root = Value::map();
/// set_at_path(&mut root, &"val[3]".parse()?, 10)?;
/// // val is now [null, null, null, 10]
/// # anyhow::Result::<()>::Ok(())
/// ```
pub fn set_at_path(root: &mut Value, path: &Path, value: impl Into<Value>) -> CodecResult<()> {
    write_into(root, path.segments(), value.into(), path)
}

/// Parse `path` and set `value` at it. See [`set_at_path`].
///
/// # Errors
/// Returns [`CodecError::Parse`] for a malformed path, otherwise as
/// [`set_at_path`].
pub fn set_at_path_str(root: &mut Value, path: &str, value: impl Into<Value>) -> CodecResult<()> {
    let path = Path::parse(path)?;
    set_at_path(root, &path, value)
}

/// The empty container a segment calls for when it has to be created.
fn vivify(next: &Segment) -> Value {
    match next {
        Segment::Index(_) => Value::list(),
        Segment::Name(_) => Value::map(),
    }
}

fn write_into(current: &mut Value, rest: &[Segment], value: Value, path: &Path) -> CodecResult<()> {
    let (seg, tail) = rest.split_first().expect("a path always has at least one segment");
    match seg {
        Segment::Name(name) => {
            let map = match current {
                Value::Map(map) => map,
                other => {
                    return Err(CodecError::mismatch(
                        path.to_string(),
                        format!("key '{}' needs a map, found {}", name, other.kind()),
                    ));
                }
            };
            if tail.is_empty() {
                map.insert(name.clone(), value);
                return Ok(());
            }
            let child = map.entry(name.clone()).or_insert_with(|| vivify(&tail[0]));
            if child.is_null() {
                *child = vivify(&tail[0]);
            }
            write_into(child, tail, value, path)
        }
        Segment::Index(idx) => {
            let list = match current {
                Value::List(list) => list,
                other => {
                    return Err(CodecError::mismatch(
                        path.to_string(),
                        format!("index [{}] needs a list, found {}", idx, other.kind()),
                    ));
                }
            };
            if list.len() <= *idx {
                list.resize(idx + 1, Value::Null);
            }
            if tail.is_empty() {
                list[*idx] = value;
                return Ok(());
            }
            let slot = &mut list[*idx];
            if slot.is_null() {
                *slot = vivify(&tail[0]);
            }
            write_into(slot, tail, value, path)
        }
    }
}
