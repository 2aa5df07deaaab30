//! Owner-scoped note queries
//!
//! Every statement here carries `owner_id = ?` in its `WHERE` clause. A note
//! belonging to someone else is therefore invisible: lookups return `None`,
//! mutations affect zero rows.

use crate::error::{Result, StorageError};
use crate::timestamps::{from_millis, now_millis};
use quill_core::types::{CreateNote, Note, NoteId, UpdateNote, UserId};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const NOTE_COLUMNS: &str =
    "id, owner_id, title, content, tags, is_pinned, created_on, updated_on";

/// Create new note
pub async fn create(pool: &SqlitePool, note: CreateNote) -> Result<Note> {
    let now = now_millis()?;
    let note = Note {
        id: NoteId::generate(),
        title: note.title,
        content: note.content,
        tags: note.tags,
        is_pinned: false,
        owner_id: note.owner_id,
        created_on: now,
        updated_on: now,
    };

    sqlx::query(
        r#"
        INSERT INTO notes (
            id, owner_id, title, content, title_key, content_key,
            tags, is_pinned, created_on, updated_on
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&note.id)
    .bind(&note.owner_id)
    .bind(&note.title)
    .bind(&note.content)
    .bind(search_key(&note.title))
    .bind(search_key(&note.content))
    .bind(serde_json::to_string(&note.tags)?)
    .bind(note.is_pinned)
    .bind(note.created_on.timestamp_millis())
    .bind(note.updated_on.timestamp_millis())
    .execute(pool)
    .await
    .map_err(|e| StorageError::from_write(e, "User", note.owner_id.as_str()))?;

    Ok(note)
}

/// Get note by ID, only if owned by `owner`
pub async fn get_by_id(pool: &SqlitePool, owner: &UserId, id: &NoteId) -> Result<Option<Note>> {
    let row = sqlx::query(&format!(
        "SELECT {NOTE_COLUMNS} FROM notes WHERE id = ? AND owner_id = ?"
    ))
    .bind(id)
    .bind(owner)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(note_from_row).transpose()
}

/// Get all notes of `owner`: pinned first, creation order within each group
pub async fn get_by_owner(pool: &SqlitePool, owner: &UserId) -> Result<Vec<Note>> {
    let rows = sqlx::query(&format!(
        r#"
        SELECT {NOTE_COLUMNS} FROM notes
        WHERE owner_id = ?
        ORDER BY is_pinned DESC, created_on ASC, rowid ASC
        "#
    ))
    .bind(owner)
    .fetch_all(pool)
    .await?;

    rows.iter().map(note_from_row).collect()
}

/// Case-insensitive substring search over title and content
///
/// Matches the lowercased query against the stored lowercase keys with
/// `instr`, so case folding covers all of Unicode and `%`/`_` are ordinary
/// characters.
pub async fn search(pool: &SqlitePool, owner: &UserId, query: &str) -> Result<Vec<Note>> {
    let needle = search_key(query);

    let rows = sqlx::query(&format!(
        r#"
        SELECT {NOTE_COLUMNS} FROM notes
        WHERE owner_id = ?
          AND (instr(title_key, ?) > 0 OR instr(content_key, ?) > 0)
        ORDER BY created_on ASC, rowid ASC
        "#
    ))
    .bind(owner)
    .bind(&needle)
    .bind(&needle)
    .fetch_all(pool)
    .await?;

    rows.iter().map(note_from_row).collect()
}

/// Apply a partial update
///
/// Absent fields keep their stored value; a supplied tag list replaces the
/// stored one. Returns `None` if no note with this ID belongs to `owner`.
pub async fn update(
    pool: &SqlitePool,
    owner: &UserId,
    id: &NoteId,
    changes: UpdateNote,
) -> Result<Option<Note>> {
    let tags = changes
        .tags
        .as_ref()
        .map(serde_json::to_string)
        .transpose()?;
    let title_key = changes.title.as_deref().map(search_key);
    let content_key = changes.content.as_deref().map(search_key);

    let result = sqlx::query(
        r#"
        UPDATE notes SET
            title = COALESCE(?, title),
            content = COALESCE(?, content),
            title_key = COALESCE(?, title_key),
            content_key = COALESCE(?, content_key),
            tags = COALESCE(?, tags),
            is_pinned = COALESCE(?, is_pinned),
            updated_on = ?
        WHERE id = ? AND owner_id = ?
        "#,
    )
    .bind(changes.title)
    .bind(changes.content)
    .bind(title_key)
    .bind(content_key)
    .bind(tags)
    .bind(changes.is_pinned)
    .bind(now_millis()?.timestamp_millis())
    .bind(id)
    .bind(owner)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    get_by_id(pool, owner, id).await
}

/// Set the pinned flag
pub async fn set_pinned(
    pool: &SqlitePool,
    owner: &UserId,
    id: &NoteId,
    pinned: bool,
) -> Result<Option<Note>> {
    let changes = UpdateNote {
        is_pinned: Some(pinned),
        ..Default::default()
    };
    update(pool, owner, id, changes).await
}

/// Delete a note; returns `false` if nothing matched
pub async fn delete(pool: &SqlitePool, owner: &UserId, id: &NoteId) -> Result<bool> {
    let result = sqlx::query("DELETE FROM notes WHERE id = ? AND owner_id = ?")
        .bind(id)
        .bind(owner)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

fn note_from_row(row: &SqliteRow) -> Result<Note> {
    let tags: String = row.try_get("tags")?;

    Ok(Note {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        content: row.try_get("content")?,
        tags: serde_json::from_str(&tags)?,
        is_pinned: row.try_get::<i64, _>("is_pinned")? != 0,
        owner_id: row.try_get("owner_id")?,
        created_on: from_millis(row.try_get("created_on")?)?,
        updated_on: from_millis(row.try_get("updated_on")?)?,
    })
}

fn search_key(text: &str) -> String {
    text.to_lowercase()
}
