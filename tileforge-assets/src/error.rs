//! Asset error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from asset loading.
///
/// Failed loads are returned to the caller and never cached; a later
/// request for the same key retries the load.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read asset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in asset {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
