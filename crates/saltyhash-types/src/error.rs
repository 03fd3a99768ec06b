use thiserror::Error;

/// Errors from key-value store operations (used by the `KvStore` port in saltyhash-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("storage connection error: {0}")]
    Connection(String),

    #[error("query error: {0}")]
    Query(String),

    #[error("failed to decode record '{key}': {reason}")]
    Decode { key: String, reason: String },
}

/// Errors surfaced to callers of the role and hashing operations.
///
/// Every variant carries a message naming the offending field or value.
/// All of them are scoped to the request that produced them.
#[derive(Debug, Error)]
pub enum HashError {
    /// Unknown field, missing or unreadable role, invalid mode or salt on write.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Input is not valid base64 or decodes to zero bytes.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unsupported algorithm {0}")]
    UnsupportedAlgorithm(String),

    /// The underlying key-value store failed.
    #[error("storage failure: {0}")]
    StorageFailure(#[from] RepositoryError),
}

/// Coarse classification of a [`HashError`], for mapping onto transport status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidRequest,
    InvalidInput,
    UnsupportedAlgorithm,
    StorageFailure,
}

impl HashError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HashError::InvalidRequest(_) => ErrorKind::InvalidRequest,
            HashError::InvalidInput(_) => ErrorKind::InvalidInput,
            HashError::UnsupportedAlgorithm(_) => ErrorKind::UnsupportedAlgorithm,
            HashError::StorageFailure(_) => ErrorKind::StorageFailure,
        }
    }
}
