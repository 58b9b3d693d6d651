use thiserror::Error;

/// Core error type shared across shopseed crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A field-set violates the catalog contract.
    #[error("invalid field-set: {0}")]
    InvalidFieldSet(String),
    /// An id could not be parsed or is out of range.
    #[error("invalid id: {0}")]
    InvalidId(String),
}

/// Convenience alias for results returned by shopseed crates.
pub type Result<T> = std::result::Result<T, Error>;
