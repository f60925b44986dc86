use thiserror::Error;

/// Errors surfaced by the graph store behind the `GraphStore` trait.
///
/// A query that succeeds with zero rows is NOT an error; callers that need
/// to distinguish "no information" from a failed call get an `Ok(vec![])`.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("graph connection failed: {0}")]
    Connect(String),

    #[error("query execution failed: {0}")]
    Execution(String),

    #[error("result row decode failed: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum ScholiaError {
    #[error("graph store error: {0}")]
    Store(#[from] StoreError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed article record: {0}")]
    MalformedRecord(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ScholiaError>;
