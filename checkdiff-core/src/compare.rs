//! Short-circuiting comparison of two delimited text inputs.

use std::io::Read;

use log::debug;

use crate::config::{CompareOptions, Side};
use crate::error::{Error, Result};
use crate::record::{parse_record, split_lines, Record};

/// Outcome of a single comparison run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Every line carries the same key and value on both sides.
    Equivalent,

    /// The inputs have a different number of lines; no content was inspected.
    LineCountMismatch {
        /// Number of lines in the first input
        lines_a: usize,
        /// Number of lines in the second input
        lines_b: usize,
    },

    /// Keys differ at `index` (zero-based).
    KeyMismatch {
        /// Zero-based line index
        index: usize,
        /// Key from the first input
        a: String,
        /// Key from the second input
        b: String,
    },

    /// Keys match but values differ at `index` (zero-based).
    ValueMismatch {
        /// Zero-based line index
        index: usize,
        /// Value from the first input
        a: String,
        /// Value from the second input
        b: String,
    },

    /// A line has fewer than two fields; the comparison was aborted.
    Malformed {
        /// Input holding the malformed line
        side: Side,
        /// Zero-based line index
        index: usize,
    },

    /// An input could not be read; no comparison took place.
    Unreadable {
        /// Input that failed
        side: Side,
        /// Path (or `-` for stdin) of the input
        path: String,
        /// Human-readable failure reason
        reason: String,
    },
}

impl Verdict {
    /// Returns `true` if both inputs were found equivalent.
    pub fn is_equivalent(&self) -> bool {
        matches!(self, Verdict::Equivalent)
    }

    /// Returns `true` for the expected "files differ" outcomes.
    ///
    /// Malformed and unreadable inputs are failures, not mismatches.
    pub fn is_mismatch(&self) -> bool {
        matches!(
            self,
            Verdict::LineCountMismatch { .. }
                | Verdict::KeyMismatch { .. }
                | Verdict::ValueMismatch { .. }
        )
    }
}

/// Compares two text buffers line by line.
///
/// Lines of `text_a` are split on [`CompareOptions::delimiter_a`], lines of
/// `text_b` on [`CompareOptions::delimiter_b`]. The scan stops at the first
/// divergence, lowest index first. At a given index a malformed line in the
/// first input wins over one in the second, and a key mismatch wins over a
/// value mismatch.
///
/// # Parameters
///
/// * `text_a` - Contents of the first input
/// * `text_b` - Contents of the second input
/// * `options` - Delimiters for each side
///
/// # Returns
///
/// The [`Verdict`] for the pair. Never [`Verdict::Unreadable`].
pub fn compare(text_a: &str, text_b: &str, options: &CompareOptions) -> Verdict {
    let lines_a = split_lines(text_a);
    let lines_b = split_lines(text_b);
    debug!(
        "comparing {} lines against {} lines",
        lines_a.len(),
        lines_b.len()
    );

    if lines_a.len() != lines_b.len() {
        return Verdict::LineCountMismatch {
            lines_a: lines_a.len(),
            lines_b: lines_b.len(),
        };
    }

    for (index, (line_a, line_b)) in lines_a.iter().zip(&lines_b).enumerate() {
        let Some(record_a) = parse_record(line_a, options.delimiter_a) else {
            return Verdict::Malformed {
                side: Side::A,
                index,
            };
        };
        let Some(record_b) = parse_record(line_b, options.delimiter_b) else {
            return Verdict::Malformed {
                side: Side::B,
                index,
            };
        };

        if let Some(verdict) = compare_records(index, record_a, record_b) {
            return verdict;
        }
    }

    Verdict::Equivalent
}

/// Reads both inputs fully and compares them with [`compare`].
///
/// Both readers are drained before any comparison begins.
///
/// # Errors
///
/// Returns an error if reading either input fails or if its contents are not
/// valid UTF-8. The first input is read (and checked) before the second.
pub fn compare_readers<A, B>(
    reader_a: A,
    reader_b: B,
    options: &CompareOptions,
) -> Result<Verdict>
where
    A: Read,
    B: Read,
{
    let text_a = read_text(reader_a, Side::A)?;
    let text_b = read_text(reader_b, Side::B)?;
    Ok(compare(&text_a, &text_b, options))
}

/// Drains `reader` into a UTF-8 string.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails and [`Error::InvalidUtf8`] if the
/// bytes are not valid UTF-8. Both carry `side`.
pub fn read_text<R: Read>(mut reader: R, side: Side) -> Result<String> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| Error::Io { side, source })?;
    debug!("read {} bytes from input {side}", bytes.len());
    String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8 { side })
}

fn compare_records(index: usize, a: Record<'_>, b: Record<'_>) -> Option<Verdict> {
    if a.key != b.key {
        return Some(Verdict::KeyMismatch {
            index,
            a: a.key.to_string(),
            b: b.key.to_string(),
        });
    }
    if a.value != b.value {
        return Some(Verdict::ValueMismatch {
            index,
            a: a.value.to_string(),
            b: b.value.to_string(),
        });
    }
    None
}
