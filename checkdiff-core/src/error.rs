//! Error types and result handling for comparison input.

use std::fmt;

use crate::config::Side;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures that prevent a comparison from producing a verdict.
///
/// Mismatches are not errors; they are reported through
/// [`Verdict`](crate::Verdict).
#[derive(Debug)]
pub enum Error {
    /// I/O failure while reading one of the inputs.
    Io {
        /// Input the failure occurred on
        side: Side,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Input could not be decoded as UTF-8 text.
    InvalidUtf8 {
        /// Input that contained invalid bytes
        side: Side,
    },
}

impl Error {
    /// Returns the input this error belongs to.
    pub fn side(&self) -> Side {
        match self {
            Error::Io { side, .. } | Error::InvalidUtf8 { side } => *side,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { source, .. } => write!(f, "{source}"),
            Error::InvalidUtf8 { .. } => f.write_str("stream did not contain valid UTF-8"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::InvalidUtf8 { .. } => None,
        }
    }
}
