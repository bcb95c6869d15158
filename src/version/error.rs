use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Package not installed: {0}")]
    NotInstalled(String),

    #[error("Registry unavailable at {path:?}: {source}")]
    RegistryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid registry JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Malformed metadata: {0}")]
    Malformed(String),
}
