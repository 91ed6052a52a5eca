//! Compound path parsing.
//!
//! A path addresses one leaf in a nested tree using the flattened column
//! syntax: dot-separated identifiers, each optionally followed by one or
//! more bracketed list indices. `a.b[0].c[2][3]` walks map key `a`, list
//! slot `0` under key `b`, then the two-dimensional slot `[2][3]` under
//! key `c`.
//!
//! Parsing is strict: a component must be exactly an identifier plus its
//! index groups. Text between or after bracket groups, non-digit bracket
//! content, and empty components are all rejected.

use crate::error::{CodecError, CodecResult};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

// identifier followed by zero or more [digits] groups, nothing else
static COMPONENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_]+)((?:\[\d+\])*)$").expect("valid component regex"));

static INDEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(\d+)\]").expect("valid index regex"));

/// One step of a [`Path`]: a map key or a list position.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment {
    /// Map key.
    Name(String),
    /// Zero-based list position.
    Index(usize),
}

/// An ordered, non-empty sequence of segments addressing one leaf location.
///
/// The first segment is always a [`Segment::Name`]; the grammar has no way
/// to spell a bare leading index.
///
/// # Example
///
/// ```
/// use treetab::{Path, Segment};
///
/// let path: Path = "b[0].cat".parse()?;
/// assert_eq!(path.segments().len(), 3);
/// assert_eq!(path.segments()[1], Segment::Index(0));
/// assert_eq!(path.to_string(), "b[0].cat");
/// # anyhow::Result::<()>::Ok(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Parse a compound path string.
    ///
    /// # Errors
    /// Returns [`CodecError::Parse`] when a component cannot be tokenized:
    /// empty components (`a..b`, a leading or trailing dot), bracket groups
    /// with non-digit content, text between or after bracket groups, or an
    /// index too large for `usize`.
    pub fn parse(input: &str) -> CodecResult<Self> {
        let mut segments = Vec::new();
        for component in input.split('.') {
            let caps = COMPONENT.captures(component).ok_or_else(|| {
                CodecError::parse(
                    input,
                    if component.is_empty() {
                        "empty component".to_string()
                    } else {
                        format!("bad component '{component}'")
                    },
                )
            })?;
            segments.push(Segment::Name(caps[1].to_string()));
            for group in INDEX.captures_iter(&caps[2]) {
                let idx = group[1].parse::<usize>().map_err(|_| {
                    CodecError::parse(input, format!("index '{}' out of range", &group[1]))
                })?;
                segments.push(Segment::Index(idx));
            }
        }
        Ok(Path { segments })
    }

    /// The segments of this path, in order. Never empty.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl FromStr for Path {
    type Err = CodecError;

    fn from_str(s: &str) -> CodecResult<Self> {
        Path::parse(s)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.segments.iter().enumerate() {
            match seg {
                Segment::Name(name) if i == 0 => write!(f, "{name}")?,
                Segment::Name(name) => write!(f, ".{name}")?,
                Segment::Index(idx) => write!(f, "[{idx}]")?,
            }
        }
        Ok(())
    }
}
