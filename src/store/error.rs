//! Error types for the file-backed store

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the store file failed
    #[error("Store IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file is not a JSON object of strings
    #[error("Failed to parse store: {0}")]
    Parse(#[from] serde_json::Error),
}
