//! Error types for the core_chat module

use thiserror::Error;

/// Result type for chat operations
pub type ChatResult<T> = Result<T, ChatError>;

/// Errors that can occur in chat operations.
///
/// Every variant is terminal for the request that produced it; there is no
/// retry and no partial success.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Malformed or missing required field, or a field outside its allowed
    /// value set
    #[error("validation failed: {0}")]
    Validation(String),

    /// Participant name already registered
    #[error("name already taken: {0}")]
    NameTaken(String),

    /// Operation references an identity that does not exist
    #[error("unknown participant: {0}")]
    UnknownParticipant(String),

    /// Required session identity absent
    #[error("missing session identity")]
    MissingIdentity,

    /// Message window size must be a positive integer
    #[error("invalid limit: {0}")]
    InvalidLimit(i64),

    /// Storage backend failure
    #[error("store error: {0}")]
    Store(String),
}

impl From<rusqlite::Error> for ChatError {
    fn from(e: rusqlite::Error) -> Self {
        ChatError::Store(e.to_string())
    }
}

impl From<r2d2::Error> for ChatError {
    fn from(e: r2d2::Error) -> Self {
        ChatError::Store(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChatError::NameTaken("Alice".to_string());
        assert_eq!(err.to_string(), "name already taken: Alice");

        let err = ChatError::UnknownParticipant("Ghost".to_string());
        assert_eq!(err.to_string(), "unknown participant: Ghost");

        let err = ChatError::InvalidLimit(-3);
        assert_eq!(err.to_string(), "invalid limit: -3");
    }

    #[test]
    fn test_sqlite_error_conversion() {
        let sql_err = rusqlite::Error::InvalidQuery;
        let err: ChatError = sql_err.into();
        assert!(matches!(err, ChatError::Store(_)));
    }
}
