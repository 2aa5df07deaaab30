/// Core error types for Quill
use thiserror::Error;

/// Result type alias using `QuillError`
pub type Result<T> = std::result::Result<T, QuillError>;

/// Core error type for Quill
#[derive(Error, Debug)]
pub enum QuillError {
    /// Missing or empty required field
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Entity not found (or not owned by the caller)
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Unique constraint violated, e.g. a second account for one email
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),
}

impl QuillError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an already-exists error
    pub fn already_exists(msg: impl Into<String>) -> Self {
        Self::AlreadyExists(msg.into())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for QuillError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
