//! Shared configuration primitives for line comparison.

use std::fmt;

/// Field delimiter used by the first input (`key,value`).
pub const DEFAULT_DELIMITER_A: char = ',';

/// Field delimiter used by the second input (`key<TAB>value`).
pub const DEFAULT_DELIMITER_B: char = '\t';

/// Identifies which of the two compared inputs something belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The first operand, parsed with [`CompareOptions::delimiter_a`].
    A,
    /// The second operand, parsed with [`CompareOptions::delimiter_b`].
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => f.write_str("A"),
            Side::B => f.write_str("B"),
        }
    }
}

/// Delimiters applied to each side of a comparison.
///
/// The two inputs usually come from different producers, so each side has its
/// own delimiter. Only the first two fields of every line are consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareOptions {
    /// Field delimiter for the first input.
    pub delimiter_a: char,
    /// Field delimiter for the second input.
    pub delimiter_b: char,
}

impl CompareOptions {
    /// Creates options with explicit delimiters for both sides.
    pub const fn new(delimiter_a: char, delimiter_b: char) -> Self {
        Self {
            delimiter_a,
            delimiter_b,
        }
    }

    /// Returns the delimiter configured for `side`.
    pub const fn delimiter(&self, side: Side) -> char {
        match side {
            Side::A => self.delimiter_a,
            Side::B => self.delimiter_b,
        }
    }
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER_A, DEFAULT_DELIMITER_B)
    }
}
