use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading workspace snapshots or configuration values.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid workspace snapshot: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid color literal `{0}` (expected #rrggbb)")]
    InvalidColor(String),
}
