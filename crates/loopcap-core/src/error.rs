//! Error types for Loopcap

use thiserror::Error;

/// Main error type for Loopcap operations
///
/// Frame comparison itself never fails; mismatched or missing inputs
/// produce defined degenerate scores instead. Errors arise only at the
/// edges, currently settings persistence.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration directory not found")]
    NoConfigDir,
}

/// Result type alias using Loopcap's Error
pub type Result<T> = std::result::Result<T, Error>;
