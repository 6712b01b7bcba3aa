//! Configuration types and constants for checkdiff CLI operations.

use checkdiff_core::CompareOptions;

/// Operand that selects standard input instead of a file.
pub const STDIN_OPERAND: &str = "-";

/// Environment variable holding the log filter (env_logger syntax).
pub const LOG_ENV: &str = "CHECKDIFF_LOG";

/// Named delimiters accepted in addition to single characters.
const NAMED_DELIMITERS: &[(&str, char)] = &[
    ("\\t", '\t'),
    ("tab", '\t'),
    ("comma", ','),
    ("space", ' '),
    ("semicolon", ';'),
    ("pipe", '|'),
];

/// Configuration for a checkdiff run
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Delimiters for each input
    pub compare: CompareOptions,
    /// Quiet level: 1 hides stdout messages, 2 also hides errors
    pub quiet: u8,
    /// Verbose output (debug logging)
    pub verbose: bool,
}

impl CliConfig {
    /// Returns `true` when announcement and verdict lines should be printed.
    pub fn prints_verdict(&self) -> bool {
        self.quiet == 0
    }

    /// Returns `true` when error messages should be printed to stderr.
    pub fn prints_errors(&self) -> bool {
        self.quiet < 2
    }
}

/// Parses a field delimiter argument.
///
/// Accepts any single character, or one of `\t`, `tab`, `comma`, `space`,
/// `semicolon`, `pipe` (names are case-insensitive).
///
/// # Errors
///
/// Returns an error message for empty input, unknown names and multi-character
/// strings, and for the newline character, which is reserved as the line
/// separator.
pub fn parse_delimiter(s: &str) -> Result<char, String> {
    if let Some((_, delimiter)) = NAMED_DELIMITERS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(s))
    {
        return Ok(*delimiter);
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some('\n'), None) => Err("newline cannot be used as a field delimiter".to_string()),
        (Some(c), None) => Ok(c),
        (None, _) => Err("delimiter must not be empty".to_string()),
        (Some(_), Some(_)) => Err(format!(
            "invalid delimiter '{s}': expected a single character or one of \
             \\t, tab, comma, space, semicolon, pipe"
        )),
    }
}
