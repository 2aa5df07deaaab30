//! Quill Core
//!
//! Domain types, storage traits, and error handling shared by the Quill
//! storage layer and server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `Note`, and their identifiers
//! - **Storage Traits**: `IdentityStore` for accounts, `NoteStore` for owner-scoped notes
//! - **Error Handling**: Unified `QuillError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use quill_core::types::{CreateNote, UserId};
//!
//! let owner = UserId::generate();
//! let note = CreateNote::new(
//!     owner,
//!     "Groceries",
//!     "Milk, eggs",
//!     vec!["home".to_string(), " home ".to_string()],
//! );
//! assert_eq!(note.tags, vec!["home".to_string()]);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{QuillError, Result};
pub use storage::{IdentityStore, NoteStore};
pub use types::{CreateNote, NewUser, Note, NoteId, UpdateNote, User, UserId};
