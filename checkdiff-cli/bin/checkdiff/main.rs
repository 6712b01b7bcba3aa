//! Key/value equivalence checker
//!
//! Compares two delimited text files line by line and reports the first
//! line whose key or value differs.

use std::process;

mod opts;

use opts::CheckdiffOpts;

use checkdiff_cli::{format_error_for_stderr, init_logging, run_cli, Error, EXIT_TROUBLE};

const PROGRAM_NAME: &str = "checkdiff";

fn main() {
    let opts = CheckdiffOpts::parse();
    let config = opts.config();

    init_logging(PROGRAM_NAME, config.verbose);

    match run_cli(&opts.files, &config, PROGRAM_NAME) {
        Ok(code) => process::exit(code),
        Err(err @ Error::MissingOperands { .. }) => {
            // Printed on stdout and never silenced, like clap's own usage errors.
            println!("{err}");
            process::exit(EXIT_TROUBLE);
        }
        Err(err) => {
            if let Some(msg) = format_error_for_stderr(PROGRAM_NAME, config.quiet, &err) {
                eprintln!("{msg}");
            }
            process::exit(EXIT_TROUBLE);
        }
    }
}
