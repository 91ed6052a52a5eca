//! Testing utilities for code that produces or consumes record batches.
//!
//! This module provides:
//! - [`RecordBuilder`]: build nested record trees fluently, including
//!   through compound paths
//! - [`assert_round_trip`]: encode a batch, decode it back, and compare
//!
//! # Example
//!
//! ```
//! use treetab::testing::{RecordBuilder, assert_round_trip};
//!
//! let record = RecordBuilder::new()
//!     .field("name", "host1")
//!     .set("tags[0]", "prod")
//!     .build();
//!
//! assert_round_trip(&[record]);
//! ```

use crate::table::{decode_table, encode_table};
use crate::value::Value;
use crate::write::set_at_path_str;

/// A fluent builder for record trees in tests.
pub struct RecordBuilder {
    root: Value,
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordBuilder {
    /// Create a builder holding an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self { root: Value::map() }
    }

    /// Set a top-level field.
    #[must_use]
    pub fn field(mut self, name: &str, value: impl Into<Value>) -> Self {
        if let Some(map) = self.root.as_map_mut() {
            map.insert(name.to_string(), value.into());
        }
        self
    }

    /// Set a value through a compound path, vivifying containers on the
    /// way down.
    ///
    /// # Panics
    /// Panics if the path is malformed or collides with an existing scalar
    /// — in a test, both mean the fixture itself is wrong.
    #[must_use]
    pub fn set(mut self, path: &str, value: impl Into<Value>) -> Self {
        set_at_path_str(&mut self.root, path, value)
            .unwrap_or_else(|e| panic!("RecordBuilder::set({path}): {e}"));
        self
    }

    /// Build and return the record.
    #[must_use]
    pub fn build(self) -> Value {
        self.root
    }
}

/// Assert that a batch survives an encode/decode round trip unchanged.
///
/// # Panics
/// Panics if encoding or decoding fails, or if the decoded batch differs
/// from the input, with both sides in the message.
pub fn assert_round_trip(records: &[Value]) {
    let text = encode_table(records).expect("encode_table failed");
    let decoded = decode_table(&text).expect("decode_table failed");
    assert_eq!(
        decoded, records,
        "round trip mismatch:\n  encoded:\n{text}\n  expected: {records:?}\n  actual: {decoded:?}"
    );
}
