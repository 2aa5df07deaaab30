//! Quill Server Library
//!
//! Multi-user notes server: token authentication, an access gate in front of
//! every owner-scoped route, and pinned/tagged/searchable notes.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod router;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use router::create_router;
pub use services::{AccountService, Claims, NoteService, TokenService};
pub use state::AppState;
