use thiserror::Error;

/// Errors raised by the persistence layer.
///
/// There is no fallback store, so callers should treat these as fatal.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON in stored collection: {0}")]
    Json(#[from] serde_json::Error),
}
