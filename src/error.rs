//! Error taxonomy for the structural codec.
//!
//! Every failure is raised synchronously from the call that detected it and
//! aborts that call entirely; there is no partial output and no recovery at
//! this layer. File-level failures belong to the [`crate::io`] convenience
//! layer, which reports through `anyhow` instead.

use std::fmt;

/// Result alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// An error raised by the path parser, path writer, flattener, or tabular
/// codec.
#[derive(Debug)]
pub enum CodecError {
    /// A compound path string could not be tokenized.
    Parse {
        /// The offending path or component text.
        input: String,
        /// What made it unparseable.
        reason: String,
    },
    /// A write or flatten step needed a container but found something else.
    TypeMismatch {
        /// Canonical path to the position in question.
        path: String,
        /// What was expected versus found.
        reason: String,
    },
    /// A header cell declared a type suffix the decoder does not know.
    UnsupportedType {
        /// The unrecognized suffix, without parentheses.
        suffix: String,
    },
    /// A cell under a typed column failed coercion.
    MalformedRow {
        /// Bare path of the declared column.
        column: String,
        /// The cell text that failed to coerce.
        cell: String,
    },
    /// The underlying CSV reader or writer failed.
    Csv(csv::Error),
}

impl CodecError {
    pub(crate) fn parse<S: Into<String>, R: Into<String>>(input: S, reason: R) -> Self {
        CodecError::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn mismatch<S: Into<String>, R: Into<String>>(path: S, reason: R) -> Self {
        CodecError::TypeMismatch {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Parse { input, reason } => {
                write!(f, "cannot parse path '{input}': {reason}")
            }
            CodecError::TypeMismatch { path, reason } => {
                write!(f, "type mismatch at '{path}': {reason}")
            }
            CodecError::UnsupportedType { suffix } => {
                write!(f, "column type '{suffix}' is not supported")
            }
            CodecError::MalformedRow { column, cell } => {
                write!(f, "cell '{cell}' is not a valid integer for column '{column}'")
            }
            CodecError::Csv(e) => write!(f, "csv: {e}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<csv::Error> for CodecError {
    fn from(e: csv::Error) -> Self {
        CodecError::Csv(e)
    }
}
