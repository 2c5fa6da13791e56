//! Error types for ventas storage.

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("io error: {0}")]
    Io(String),

    /// Encoding records to JSON failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}
