//! # Treetab
//!
//! A **structural codec** for interchanging nested configuration records with
//! flat CSV tables. The same batch of records can be edited in a spreadsheet
//! or programmatically as trees, and converted between the two shapes without
//! losing structure for non-degenerate inputs.
//!
//! ## Key Features
//!
//! - **Compound path addressing** - `a.b[0].c[2][3]` names one leaf in a tree,
//!   including multi-dimensional list slots
//! - **Auto-vivifying deep writes** - [`set_at_path`] creates intermediate
//!   lists and maps on demand and pads list gaps with nulls
//! - **Recursive flattening** - [`flatten`] turns one record into its
//!   leaf-path/value mapping
//! - **Batch type inference** - columns that are all integers or all booleans
//!   get `(int)`/`(bool)` header annotations and decode back typed
//! - **Deterministic tables** - columns are the sorted union of leaf paths
//!   across the batch, independent of field insertion order
//! - **Parallel encoding** - per-record flattening fans out with rayon
//!   (feature `parallel`)
//!
//! ## Quick Start
//!
//! ```
//! use treetab::{decode_table, encode_table, Value};
//!
//! # fn main() -> anyhow::Result<()> {
//! let records: Vec<Value> = serde_json::from_str(
//!     r#"[{"name":"host1","value":"1.1.1.1"},
//!         {"name":"host2","value":"2.2.2.2"}]"#,
//! )?;
//!
//! let text = encode_table(&records)?;
//! assert_eq!(text, "name,value\nhost1,1.1.1.1\nhost2,2.2.2.2\n");
//!
//! let back = decode_table(&text)?;
//! assert_eq!(back, records);
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! ### Records and values
//!
//! A record is a [`Value::Map`]; below it, values nest freely as scalars
//! (null, bool, integer, string), lists, and maps. `Value` round-trips
//! through plain JSON, so batches can be read from and written to JSON
//! documents directly (see the [`io`] module).
//!
//! ### Paths
//!
//! A [`Path`] is the parsed form of a flattened column name: dot-separated
//! map keys, each optionally indexed one or more times. The header row of a
//! table is exactly the sorted set of leaf paths appearing anywhere in the
//! batch.
//!
//! ### The null sentinel
//!
//! CSV cells have no way to distinguish "no value" from "explicitly null",
//! so both encode to the reserved literal [`NULL_SENTINEL`] and both decode
//! to an explicit null. This collapse is a documented property of the
//! format, not a defect.
//!
//! ### Short rows
//!
//! A data row with fewer cells than the header leaves its trailing columns
//! entirely unset rather than null. This is preserved observed behavior;
//! see [`decode_table`] for the details.
//!
//! ## Errors
//!
//! The codec reports through [`CodecError`]: malformed paths, writes that
//! would descend into a scalar, unknown header type suffixes, and cells
//! that fail their column's coercion. Every error aborts the whole call —
//! there is no partial output. The file helpers in [`io`] wrap these with
//! `anyhow` path context instead.
//!
//! ## Feature Flags
//!
//! - `parallel` - Enable parallel flattening ([`encode_table_par`] and
//!   [`io::csv::write_table_file_par`]) via rayon
//!
//! ## Module Overview
//!
//! - [`value`] - The `Value` tree model
//! - [`path`] - Compound path parsing
//! - [`write`] - Path-addressed deep mutation
//! - [`flatten`] - Record flattening into leaf rows
//! - [`infer`] - Per-column type inference and coercion
//! - [`table`] - The tabular encode/decode algorithms
//! - [`io`] - CSV/JSON file conveniences
//! - [`testing`] - Builders and assertions for tests

pub mod error;
pub mod flatten;
pub mod infer;
pub mod io;
pub mod path;
pub mod table;
pub mod testing;
pub mod value;
pub mod write;

// General re-exports
pub use error::{CodecError, CodecResult};
pub use flatten::{FlatRow, flatten};
pub use infer::{ColumnType, infer_column_types};
pub use path::{Path, Segment};
pub use table::{NULL_SENTINEL, decode_table, encode_table};
pub use value::Value;
pub use write::{set_at_path, set_at_path_str};

// Gated re-exports
#[cfg(feature = "parallel")]
pub use table::encode_table_par;
