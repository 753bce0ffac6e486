use std::path::PathBuf;

use thiserror::Error;

/// Failure to read a combat log. Everything inside the log (unknown lines,
/// truncated records, bad numbers) is recovered from and never surfaces here.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("combat log not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read combat log {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write CSV {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write JSON {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
