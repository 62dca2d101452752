//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Ergani client error
    #[error("{0}")]
    Ergani(#[from] ergani_client::ErganiError),

    /// Batch file could not be parsed
    #[error("Invalid batch file {}: {source}", .path.display())]
    BatchFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
