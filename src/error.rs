//! Error types for browser storage access and route manifests.

use thiserror::Error;

/// Failure reading a client-side key-value store.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
}

/// Failure loading a route manifest.
#[derive(Debug, Error)]
pub enum RouteTableError {
    #[error("invalid route manifest: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("route path must start with '/': {0}")]
    InvalidPath(String),
    #[error("duplicate route path: {0}")]
    DuplicatePath(String),
}
