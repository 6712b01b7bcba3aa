//! Input handling for checkdiff operands.

use std::fs::File;
use std::io;

use checkdiff_core::{read_text, Side};
use log::debug;

use crate::config::STDIN_OPERAND;
use crate::error::InputError;

/// Opens an input reader for the given operand, or stdin for `-`.
///
/// # Parameters
///
/// * `path` - Path to the input file, or `-` for stdin
/// * `side` - Which operand is being opened, recorded in errors
///
/// # Errors
///
/// Returns [`InputError::Open`] if the file cannot be opened.
pub fn open_input(path: &str, side: Side) -> Result<Box<dyn io::Read>, InputError> {
    if path == STDIN_OPERAND {
        return Ok(Box::new(io::stdin().lock()));
    }

    let file = File::open(path).map_err(|source| InputError::Open {
        side,
        path: path.to_string(),
        source,
    })?;
    Ok(Box::new(file))
}

/// Reads an operand fully into memory as UTF-8 text.
///
/// The underlying handle is dropped before this function returns.
///
/// # Errors
///
/// Returns [`InputError::Open`] if the file cannot be opened, or
/// [`InputError::Read`] if reading fails or the contents are not UTF-8.
pub fn read_operand(path: &str, side: Side) -> Result<String, InputError> {
    let reader = open_input(path, side)?;
    let text = read_text(reader, side).map_err(|source| InputError::Read {
        path: path.to_string(),
        source,
    })?;
    debug!("{path}: read {} bytes", text.len());
    Ok(text)
}
