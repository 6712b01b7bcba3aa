//! Logger setup for the checkdiff binary.

use std::io::Write;

use env_logger::{Builder, Env};
use log::LevelFilter;

use crate::config::LOG_ENV;

/// Builds the stderr logger used by the binary.
///
/// The filter comes from [`LOG_ENV`] and defaults to `warn`. `verbose`
/// raises the default level to `debug`.
pub fn logger(program: &'static str, verbose: bool) -> Builder {
    let mut builder = Builder::from_env(Env::default().filter_or(LOG_ENV, "warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format(move |buf, record| {
        writeln!(buf, "{program}: {:<5}: {}", record.level(), record.args())
    });
    builder
}

/// Installs the logger, ignoring a logger that is already set.
pub fn init_logging(program: &'static str, verbose: bool) {
    // A second initialisation only happens in tests.
    let _ = logger(program, verbose).try_init();
}
