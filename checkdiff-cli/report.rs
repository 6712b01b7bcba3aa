//! Human-readable rendering of comparison verdicts.

use checkdiff_core::{CompareOptions, Side, Verdict};

/// Exit status when the inputs are equivalent.
pub const EXIT_SAME: i32 = 0;

/// Exit status when a line count, key or value mismatch was found.
pub const EXIT_DIFFERENT: i32 = 1;

/// Exit status for usage errors, malformed lines and unreadable inputs.
pub const EXIT_TROUBLE: i32 = 2;

/// A rendered verdict and the stream it belongs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Regular outcome, printed to stdout.
    Stdout(String),
    /// Failure outcome, printed to stderr with the program prefix.
    Stderr(String),
}

/// Returns the line announcing which inputs are compared.
pub fn announcement(path_a: &str, path_b: &str) -> String {
    format!("Two files are: {path_a}  and {path_b}")
}

/// Renders `verdict` for inputs `path_a` and `path_b`.
pub fn render_verdict(
    verdict: &Verdict,
    path_a: &str,
    path_b: &str,
    options: &CompareOptions,
) -> Message {
    match verdict {
        Verdict::Equivalent => Message::Stdout("two files are the same!".to_string()),
        Verdict::LineCountMismatch { .. } => Message::Stdout(format!(
            "{path_a}and{path_b}are different: different line number!"
        )),
        Verdict::KeyMismatch { index, a, b } => Message::Stdout(format!(
            "{path_a} and {path_b} are different: \nLine:{index}; different key:{a}{b}"
        )),
        Verdict::ValueMismatch { index, a, b } => Message::Stdout(format!(
            "{path_a} and {path_b} are different: \nLine:{index}; different value:{a}{b}"
        )),
        Verdict::Malformed { side, index } => {
            let path = match side {
                Side::A => path_a,
                Side::B => path_b,
            };
            let delimiter = options.delimiter(*side).escape_debug();
            Message::Stderr(format!(
                "{path}: Line:{index}; malformed line, expected at least two fields \
                 separated by '{delimiter}'"
            ))
        }
        Verdict::Unreadable { path, reason, .. } => {
            Message::Stderr(format!("{path}: cannot read file: {reason}"))
        }
    }
}

/// Maps a verdict to the process exit status.
pub fn exit_code(verdict: &Verdict) -> i32 {
    if verdict.is_equivalent() {
        EXIT_SAME
    } else if verdict.is_mismatch() {
        EXIT_DIFFERENT
    } else {
        EXIT_TROUBLE
    }
}
