//! Error types for the classifier.

/// Result type for classifier operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur loading or evaluating the model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Reading the weight artifact failed.
    #[error("io error: {0}")]
    Io(String),

    /// The weight artifact is not valid JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// The weight artifact is structurally unsound.
    #[error("invalid model: {0}")]
    Invalid(String),

    /// The input or output vector has the wrong length.
    #[error("arity mismatch: expected {expected} values, got {got}")]
    Arity {
        /// Expected vector length.
        expected: usize,
        /// Actual vector length.
        got: usize,
    },
}
