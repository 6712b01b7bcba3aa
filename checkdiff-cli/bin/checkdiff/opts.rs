//! Command line argument parsing for checkdiff

use clap::Parser;

use checkdiff_cli::{parse_delimiter, CliConfig};
use checkdiff_core::CompareOptions;

/// Key/value equivalence checker for delimited text files
///
/// Compares FILE1 (comma-separated `key,value` lines) against FILE2
/// (tab-separated `key<TAB>value` lines) and reports the first mismatch.
#[derive(Parser, Debug)]
#[command(
    name = "checkdiff",
    version = "0.1.1",
    about = "Check that two delimited files hold the same key/value lines",
    long_about = "checkdiff compares two text files line by line. Each line of FILE1 is split \
                  on the first delimiter and each line of FILE2 on the second; the first two \
                  fields are compared as key and value. Comparison stops at the first mismatch.\n\n\
                  Exit status is 0 if the files are the same, 1 if they differ, 2 on trouble."
)]
pub struct CheckdiffOpts {
    /// Files to compare (use `-` for standard input, and `--` before names starting with `-`);
    /// operands after the second are ignored
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    /// Field delimiter of FILE1 (a character, `\t`, tab, comma, space, semicolon or pipe)
    #[arg(
        short = 'a',
        long = "delimiter-a",
        value_name = "DELIM",
        default_value = ",",
        value_parser = parse_delimiter
    )]
    pub delimiter_a: char,

    /// Field delimiter of FILE2 (a character, `\t`, tab, comma, space, semicolon or pipe)
    #[arg(
        short = 'b',
        long = "delimiter-b",
        value_name = "DELIM",
        default_value = "tab",
        value_parser = parse_delimiter
    )]
    pub delimiter_b: char,

    /// Quiet mode (only the exit status reports the result). Use twice to suppress errors too.
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose", action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Verbose mode (debug logging on stderr)
    #[arg(short = 'v', long = "verbose", conflicts_with = "quiet")]
    pub verbose: bool,
}

impl CheckdiffOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build CLI configuration from the parsed options
    pub fn config(&self) -> CliConfig {
        CliConfig {
            compare: CompareOptions::new(self.delimiter_a, self.delimiter_b),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
