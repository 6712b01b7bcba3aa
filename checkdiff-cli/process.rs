//! High-level comparison flow and CLI orchestration.

use std::io::{self, Write};

use checkdiff_core::{compare, Side, Verdict};
use log::debug;

use crate::config::{CliConfig, STDIN_OPERAND};
use crate::error::{Error, InputError, Result};
use crate::io::read_operand;
use crate::report::{announcement, exit_code, render_verdict, Message};

/// Picks the two operands to compare.
///
/// Operands after the second are ignored.
///
/// # Errors
///
/// Returns [`Error::MissingOperands`] for fewer than two operands and
/// [`Error::DuplicateStdin`] if both operands are `-`.
pub fn resolve_operands(files: &[String]) -> Result<(&str, &str)> {
    let [path_a, path_b, rest @ ..] = files else {
        return Err(Error::MissingOperands { given: files.len() });
    };

    if path_a.as_str() == STDIN_OPERAND && path_b.as_str() == STDIN_OPERAND {
        return Err(Error::DuplicateStdin);
    }
    if !rest.is_empty() {
        debug!("ignoring {} extra operand(s): {rest:?}", rest.len());
    }
    Ok((path_a.as_str(), path_b.as_str()))
}

/// Reads both operands and compares them.
///
/// The first operand is read completely before the second one is opened.
/// Read failures are reported as [`Verdict::Unreadable`].
pub fn compare_paths(path_a: &str, path_b: &str, config: &CliConfig) -> Verdict {
    match read_both(path_a, path_b) {
        Ok((text_a, text_b)) => compare(&text_a, &text_b, &config.compare),
        Err(err) => err.into(),
    }
}

fn read_both(path_a: &str, path_b: &str) -> std::result::Result<(String, String), InputError> {
    let text_a = read_operand(path_a, Side::A)?;
    let text_b = read_operand(path_b, Side::B)?;
    Ok((text_a, text_b))
}

/// Runs one comparison, writing messages to the given streams.
///
/// # Parameters
///
/// * `files` - Operands as given on the command line
/// * `config` - CLI configuration
/// * `program` - Program name used to prefix stderr messages
/// * `out` - Destination for the announcement and regular verdicts
/// * `err` - Destination for failure verdicts
///
/// # Returns
///
/// The exit status for the verdict reached.
///
/// # Errors
///
/// Returns usage errors from [`resolve_operands`] before anything is printed,
/// or [`Error::Output`] if writing a message fails.
pub fn run_with_output<O, E>(
    files: &[String],
    config: &CliConfig,
    program: &str,
    mut out: O,
    mut err: E,
) -> Result<i32>
where
    O: Write,
    E: Write,
{
    let (path_a, path_b) = resolve_operands(files)?;
    debug!("comparing {path_a} against {path_b} with {:?}", config.compare);

    if config.prints_verdict() {
        writeln!(out, "{}", announcement(path_a, path_b))?;
    }

    let verdict = compare_paths(path_a, path_b, config);
    debug!("verdict: {verdict:?}");

    match render_verdict(&verdict, path_a, path_b, &config.compare) {
        Message::Stdout(msg) if config.prints_verdict() => writeln!(out, "{msg}")?,
        Message::Stderr(msg) if config.prints_errors() => writeln!(err, "{program}: {msg}")?,
        _ => {}
    }
    out.flush()?;

    Ok(exit_code(&verdict))
}

/// Runs one comparison against the process stdout and stderr.
///
/// # Errors
///
/// See [`run_with_output`].
pub fn run_cli(files: &[String], config: &CliConfig, program: &str) -> Result<i32> {
    run_with_output(files, config, program, io::stdout().lock(), io::stderr())
}
