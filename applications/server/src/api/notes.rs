/// Notes API routes
///
/// Every handler here sits behind the access gate and acts on behalf of the
/// authenticated caller only.
use crate::{
    api::ApiJson, error::Result, middleware::AuthenticatedUser, services::NoteEdit,
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use quill_core::{Note, NoteId};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct AddNoteRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_pinned: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinNoteRequest {
    pub is_pinned: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub error: bool,
    pub note: Note,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct NotesResponse {
    pub error: bool,
    pub notes: Vec<Note>,
    pub message: String,
}

/// POST /Add-Note
pub async fn add_note(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    ApiJson(req): ApiJson<AddNoteRequest>,
) -> Result<Json<NoteResponse>> {
    let note = app_state
        .notes
        .create(&auth.user_id(), &req.title, &req.content, req.tags)
        .await?;

    Ok(Json(NoteResponse {
        error: false,
        note,
        message: "Note added Successfully".to_string(),
    }))
}

/// PUT /Edit-Note/:noteId
pub async fn edit_note(
    Path(note_id): Path<String>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    ApiJson(req): ApiJson<EditNoteRequest>,
) -> Result<Json<NoteResponse>> {
    let edit = NoteEdit {
        title: req.title,
        content: req.content,
        tags: req.tags,
        is_pinned: req.is_pinned,
    };

    let note = app_state
        .notes
        .update(&auth.user_id(), &NoteId::new(note_id), edit)
        .await?;

    Ok(Json(NoteResponse {
        error: false,
        note,
        message: "Note Updated Successfully".to_string(),
    }))
}

/// GET /Get-All-Notes
/// Pinned notes come first
pub async fn get_all_notes(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<NotesResponse>> {
    let notes = app_state.notes.list(&auth.user_id()).await?;

    Ok(Json(NotesResponse {
        error: false,
        notes,
        message: "Notes Retrieved Successfully".to_string(),
    }))
}

/// DELETE /Delete-Note/:noteId
pub async fn delete_note(
    Path(note_id): Path<String>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<Value>> {
    app_state
        .notes
        .delete(&auth.user_id(), &NoteId::new(note_id))
        .await?;

    Ok(Json(json!({
        "error": false,
        "message": "Note Deleted Successfully",
    })))
}

/// PUT /Update-Note-Pinned/:noteId
pub async fn update_note_pinned(
    Path(note_id): Path<String>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    ApiJson(req): ApiJson<PinNoteRequest>,
) -> Result<Json<NoteResponse>> {
    let note = app_state
        .notes
        .set_pinned(&auth.user_id(), &NoteId::new(note_id), req.is_pinned)
        .await?;

    Ok(Json(NoteResponse {
        error: false,
        note,
        message: "Note Pinned Updated Successfully".to_string(),
    }))
}

/// GET /Search-Note?query=...
pub async fn search_notes(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Query(params): Query<SearchParams>,
) -> Result<Json<NotesResponse>> {
    let notes = app_state
        .notes
        .search(&auth.user_id(), params.query.as_deref())
        .await?;

    Ok(Json(NotesResponse {
        error: false,
        notes,
        message: "Notes Found Successfully".to_string(),
    }))
}
