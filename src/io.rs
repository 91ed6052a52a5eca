//! File conveniences around the in-memory codec.
//!
//! The codec core ([`crate::encode_table`], [`crate::decode_table`]) only
//! touches strings; these helpers add the surrounding file plumbing:
//!
//! - [`csv`](crate::io::csv) — read/write whole record batches as CSV files
//! - [`json`](crate::io::json) — read/write record batches as JSON files,
//!   plus pure text-to-text conversion between the two encodings
//!
//! Failures here are I/O- and format-level, reported through `anyhow` with
//! path context; codec failures keep their typed [`crate::CodecError`]
//! shape inside the error chain.

pub mod csv;
pub mod json;
