/// Failures from the key/value storage backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store cannot be reached at all (e.g. localStorage disabled).
    Unavailable,
    /// Stored text exists but does not parse as the expected record shape.
    Corrupt(String),
    /// The backend reported a failure on read or write.
    Backend(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Unavailable => write!(f, "storage unavailable"),
            StoreError::Corrupt(detail) => write!(f, "stored data is corrupt: {detail}"),
            StoreError::Backend(detail) => write!(f, "storage backend error: {detail}"),
        }
    }
}

impl std::error::Error for StoreError {}
