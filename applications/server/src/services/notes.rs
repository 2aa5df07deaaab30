/// Note service - validation and ownership-scoped note operations
use crate::error::{Result, ServerError};
use quill_core::{CreateNote, Note, NoteId, NoteStore, UpdateNote, UserId};
use std::sync::Arc;

const NOTE_NOT_FOUND: &str = "Note not Found";

/// Edit request as received; see `NoteService::update` for which fields count
#[derive(Debug, Clone, Default)]
pub struct NoteEdit {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_pinned: Option<bool>,
}

pub struct NoteService {
    store: Arc<dyn NoteStore>,
}

impl NoteService {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    /// Create a note for `owner`. Tags default to empty, pinned to false.
    pub async fn create(
        &self,
        owner: &UserId,
        title: &str,
        content: &str,
        tags: Option<Vec<String>>,
    ) -> Result<Note> {
        if title.is_empty() {
            return Err(ServerError::InvalidInput("Title is Required".to_string()));
        }
        if content.is_empty() {
            return Err(ServerError::InvalidInput("Content is Required".to_string()));
        }

        let note = self
            .store
            .create_note(CreateNote::new(
                owner.clone(),
                title,
                content,
                tags.unwrap_or_default(),
            ))
            .await?;

        tracing::info!(note_id = %note.id, owner = %owner, "Note created");
        Ok(note)
    }

    /// Partially update a note
    ///
    /// Empty strings and a `false` pinned flag mean "no change" here; a
    /// present tag list (even an empty one) replaces the stored tags.
    pub async fn update(&self, owner: &UserId, id: &NoteId, edit: NoteEdit) -> Result<Note> {
        let changes = UpdateNote {
            title: edit.title.filter(|t| !t.is_empty()),
            content: edit.content.filter(|c| !c.is_empty()),
            tags: edit.tags.map(quill_core::types::normalize_tags),
            is_pinned: edit.is_pinned.filter(|pinned| *pinned),
        };

        if changes.is_empty() {
            return Err(ServerError::InvalidInput("No Change Provided".to_string()));
        }

        let note = self
            .store
            .update_note(owner, id, changes)
            .await?
            .ok_or_else(|| ServerError::NotFound(NOTE_NOT_FOUND.to_string()))?;

        tracing::debug!(note_id = %id, "Note updated");
        Ok(note)
    }

    /// Set the pinned flag; an absent value unpins
    pub async fn set_pinned(
        &self,
        owner: &UserId,
        id: &NoteId,
        is_pinned: Option<bool>,
    ) -> Result<Note> {
        self.store
            .set_pinned(owner, id, is_pinned.unwrap_or(false))
            .await?
            .ok_or_else(|| ServerError::NotFound(NOTE_NOT_FOUND.to_string()))
    }

    pub async fn delete(&self, owner: &UserId, id: &NoteId) -> Result<()> {
        if !self.store.delete_note(owner, id).await? {
            return Err(ServerError::NotFound(NOTE_NOT_FOUND.to_string()));
        }

        tracing::info!(note_id = %id, owner = %owner, "Note deleted");
        Ok(())
    }

    /// All notes of `owner`, pinned first
    pub async fn list(&self, owner: &UserId) -> Result<Vec<Note>> {
        Ok(self.store.list_notes(owner).await?)
    }

    /// Case-insensitive substring search over title and content
    pub async fn search(&self, owner: &UserId, query: Option<&str>) -> Result<Vec<Note>> {
        let query = query
            .filter(|q| !q.is_empty())
            .ok_or_else(|| ServerError::InvalidInput("Search Query is required".to_string()))?;

        Ok(self.store.search_notes(owner, query).await?)
    }
}
