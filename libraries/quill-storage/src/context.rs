use crate::{notes, users};
use async_trait::async_trait;
use quill_core::{
    error::Result,
    storage::{IdentityStore, NoteStore},
    types::{CreateNote, NewUser, Note, NoteId, UpdateNote, User, UserId},
};
use sqlx::SqlitePool;

/// `SQLite`-backed implementation of the Quill storage traits
#[derive(Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityStore for SqliteStorage {
    async fn create_user(&self, user: NewUser) -> Result<User> {
        Ok(users::create(&self.pool, user).await?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(users::find_by_email(&self.pool, email).await?)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>> {
        Ok(users::find_by_id(&self.pool, id).await?)
    }

    async fn password_hash(&self, id: &UserId) -> Result<Option<String>> {
        Ok(users::get_password_hash(&self.pool, id).await?)
    }
}

#[async_trait]
impl NoteStore for SqliteStorage {
    async fn create_note(&self, note: CreateNote) -> Result<Note> {
        Ok(notes::create(&self.pool, note).await?)
    }

    async fn get_note(&self, owner: &UserId, id: &NoteId) -> Result<Option<Note>> {
        Ok(notes::get_by_id(&self.pool, owner, id).await?)
    }

    async fn update_note(
        &self,
        owner: &UserId,
        id: &NoteId,
        changes: UpdateNote,
    ) -> Result<Option<Note>> {
        Ok(notes::update(&self.pool, owner, id, changes).await?)
    }

    async fn set_pinned(
        &self,
        owner: &UserId,
        id: &NoteId,
        pinned: bool,
    ) -> Result<Option<Note>> {
        Ok(notes::set_pinned(&self.pool, owner, id, pinned).await?)
    }

    async fn delete_note(&self, owner: &UserId, id: &NoteId) -> Result<bool> {
        Ok(notes::delete(&self.pool, owner, id).await?)
    }

    async fn list_notes(&self, owner: &UserId) -> Result<Vec<Note>> {
        Ok(notes::get_by_owner(&self.pool, owner).await?)
    }

    async fn search_notes(&self, owner: &UserId, query: &str) -> Result<Vec<Note>> {
        Ok(notes::search(&self.pool, owner, query).await?)
    }
}
