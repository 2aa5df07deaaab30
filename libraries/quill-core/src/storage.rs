//! Storage traits for accounts and notes

use crate::error::Result;
use crate::types::{CreateNote, NewUser, Note, NoteId, UpdateNote, User, UserId};
use async_trait::async_trait;

/// Durable user records
///
/// Emails compare case-insensitively; uniqueness is enforced at write time.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Create a user and its credential.
    ///
    /// Fails with `QuillError::AlreadyExists` if the email is taken.
    async fn create_user(&self, user: NewUser) -> Result<User>;

    /// Find a user by email (case-insensitive)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Find a user by ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>>;

    /// Stored credential hash for a user, if any
    async fn password_hash(&self, id: &UserId) -> Result<Option<String>>;
}

/// Durable note records, always scoped to an owner
///
/// Every lookup and mutation takes the owner and matches on it. A note that
/// exists under another owner is reported exactly like a missing one
/// (`None` / `false`).
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Insert a new note. Pinned starts out false.
    async fn create_note(&self, note: CreateNote) -> Result<Note>;

    /// Get a note owned by `owner`
    async fn get_note(&self, owner: &UserId, id: &NoteId) -> Result<Option<Note>>;

    /// Apply a partial update, returning the updated note
    async fn update_note(
        &self,
        owner: &UserId,
        id: &NoteId,
        changes: UpdateNote,
    ) -> Result<Option<Note>>;

    /// Set the pinned flag, returning the updated note
    async fn set_pinned(&self, owner: &UserId, id: &NoteId, pinned: bool)
        -> Result<Option<Note>>;

    /// Delete a note; returns whether anything was removed
    async fn delete_note(&self, owner: &UserId, id: &NoteId) -> Result<bool>;

    /// All notes of `owner`, pinned first, then in creation order
    async fn list_notes(&self, owner: &UserId) -> Result<Vec<Note>>;

    /// Notes of `owner` whose title or content contains `query`, ignoring case
    async fn search_notes(&self, owner: &UserId, query: &str) -> Result<Vec<Note>>;
}
