use std::ffi::OsStr;
use std::fs::{File, OpenOptions};

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Environment variable naming a file diagnostics are appended to.
pub const LOG_PATH_ENV: &str = "OGRH_LOG_PATH";

/// Install the global subscriber. `RUST_LOG` overrides the default level,
/// which is `debug` when `verbose` is set and `info` otherwise.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose);

    match std::env::var_os(LOG_PATH_ENV).and_then(|path| open_log_file(&path)) {
        Some(file) => builder.with_ansi(false).with_writer(file).init(),
        // stdout carries the reports
        None => builder.with_writer(std::io::stderr).init(),
    }
}

/// Open `path` for appending. On failure, say so on stderr and return
/// `None` so diagnostics still reach the terminal.
fn open_log_file(path: &OsStr) -> Option<File> {
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!(
                "cannot open log file {}: {e}; logging to stderr",
                path.to_string_lossy()
            );
            None
        }
    }
}
