//! Error types for checkdiff CLI operations.

use std::io;

use thiserror::Error;

use checkdiff_core::{Side, Verdict};

/// Main error type for checkdiff CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Fewer than two file operands
    #[error("Needs Two Files to Compare!")]
    MissingOperands {
        /// Number of operands actually supplied
        given: usize,
    },

    /// Both operands name standard input
    #[error("standard input ('-') can only be used for one operand")]
    DuplicateStdin,

    /// Failed to write a message to stdout or stderr
    #[error("write error: {0}")]
    Output(#[from] io::Error),
}

/// Specialized `Result` type for checkdiff CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure to read one operand into memory.
#[derive(Debug, Error)]
pub enum InputError {
    /// Failed to open input file
    #[error("{path}: cannot read file: {source}")]
    Open {
        /// Which operand failed
        side: Side,
        /// Path to the input file
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to read or decode an opened input
    #[error("{path}: cannot read file: {source}")]
    Read {
        /// Path to the input file
        path: String,
        /// Underlying read failure
        #[source]
        source: checkdiff_core::Error,
    },
}

impl InputError {
    /// Operand whose input could not be read.
    pub fn side(&self) -> Side {
        match self {
            InputError::Open { side, .. } => *side,
            InputError::Read { source, .. } => source.side(),
        }
    }
}

impl From<InputError> for Verdict {
    fn from(err: InputError) -> Self {
        let side = err.side();
        match err {
            InputError::Open { path, source, .. } => Verdict::Unreadable {
                side,
                path,
                reason: source.to_string(),
            },
            InputError::Read { path, source } => Verdict::Unreadable {
                side,
                path,
                reason: source.to_string(),
            },
        }
    }
}

/// Formats an error message for stderr, respecting `-q/-qq`.
///
/// # Parameters
///
/// - `program`: Program name prefix to use in error output.
/// - `quiet`: Quiet level (as counted by `-q` occurrences).
/// - `err`: The error returned by the CLI runner.
///
/// # Returns
///
/// Returns `None` when the message should be suppressed by `quiet`,
/// otherwise returns a formatted single-line message suitable for stderr.
pub fn format_error_for_stderr(program: &str, quiet: u8, err: &Error) -> Option<String> {
    if quiet >= 2 {
        return None;
    }
    Some(format!("{program}: {err}"))
}
