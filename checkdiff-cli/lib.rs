//! Common CLI functionality for the `checkdiff` tool.
//!
//! This crate sits between the command-line entrypoint and `checkdiff-core`:
//! it resolves operands, reads inputs into memory, renders verdicts and maps
//! them to exit statuses.

mod config;
mod error;
mod io;
mod logging;
mod process;
mod report;


pub use config::{parse_delimiter, CliConfig, LOG_ENV, STDIN_OPERAND};
pub use error::{format_error_for_stderr, Error, InputError, Result};
pub use io::{open_input, read_operand};
pub use logging::init_logging;
pub use process::{compare_paths, resolve_operands, run_cli, run_with_output};
pub use report::{
    announcement, exit_code, render_verdict, Message, EXIT_DIFFERENT, EXIT_SAME, EXIT_TROUBLE,
};
