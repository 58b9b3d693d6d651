use thiserror::Error;

/// Failures raised by the random content collaborators.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("no fresh value for '{scope}' after {attempts} attempts")]
    UniqueExhausted { scope: String, attempts: u32 },
    #[error("cannot sample from an empty candidate pool")]
    EmptyPool,
    #[error("invalid range: {min}..={max}")]
    InvalidRange { min: i64, max: i64 },
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
}

/// Errors emitted by the catalog generator.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The catalog store refused the entity or answered without an id.
    #[error("creation failed: {0}")]
    CreationFailed(String),
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
}
