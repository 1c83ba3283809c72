use thiserror::Error;

/// Core error type shared across reportforge crates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A composite field is missing its enum values or nested schema.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
    /// The field type tag is not one of the recognized types.
    #[error("unsupported field type: {0}")]
    UnsupportedType(String),
    /// Structurally invalid top-level input, such as a negative count.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience alias for results returned by reportforge crates.
pub type Result<T> = std::result::Result<T, Error>;
