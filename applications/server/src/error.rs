/// Server error types
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use quill_core::QuillError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    /// Missing or empty required field; the message is shown to the caller
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Login with an unknown email or a wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// No bearer credential presented
    #[error("Authentication required: {0}")]
    Unauthenticated(String),

    /// Credential presented but invalid or expired
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

impl From<QuillError> for ServerError {
    fn from(err: QuillError) -> Self {
        match err {
            QuillError::InvalidInput(msg) => ServerError::InvalidInput(msg),
            QuillError::NotFound { entity, .. } => {
                ServerError::NotFound(format!("{} not Found", entity))
            }
            QuillError::AlreadyExists(msg) => ServerError::AlreadyExists(msg),
            QuillError::Storage(msg) | QuillError::Database(msg) => ServerError::Storage(msg),
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ServerError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                "Invalid email or password".to_string(),
            ),
            ServerError::Unauthenticated(msg) => (StatusCode::UNAUTHORIZED, msg),
            ServerError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ServerError::AlreadyExists(msg) => (StatusCode::CONFLICT, msg),
            ServerError::Jwt(ref e) => {
                tracing::warn!("JWT error: {:?}", e);
                (StatusCode::FORBIDDEN, "Invalid or expired token".to_string())
            }
            ServerError::Storage(ref msg) => {
                tracing::error!("Storage error: {}", msg);
                internal()
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                internal()
            }
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                internal()
            }
            ServerError::Bcrypt(ref e) => {
                tracing::error!("Bcrypt error: {:?}", e);
                internal()
            }
        };

        let body = Json(json!({
            "error": true,
            "message": message,
        }));

        (status, body).into_response()
    }
}

fn internal() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error".to_string(),
    )
}
