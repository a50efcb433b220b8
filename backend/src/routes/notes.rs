//! Note CRUD routes (authenticated surface)
//!
//! Creation skips authentication so the Discord bot can file notes for
//! users who have never registered; everything else requires a bearer
//! token and is scoped to the caller's own notes.

use crate::auth::CurrentUser;
use crate::error::ApiResult;
use crate::services::NoteService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use discord_notes_shared::types::{
    CreateNoteRequest, MessageResponse, NoteResponse, NotesQuery, UpdateNoteRequest,
};

/// Create note routes
pub fn note_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_note).get(list_notes))
        .route("/:id", get(get_note).put(update_note).delete(delete_note))
}

/// Create a note, auto-provisioning its owner if needed
///
/// POST /api/notes
async fn create_note(
    State(state): State<AppState>,
    Json(req): Json<CreateNoteRequest>,
) -> ApiResult<Json<NoteResponse>> {
    let note = NoteService::create(state.db(), req).await?;
    Ok(Json(note))
}

/// List the caller's notes, newest first
///
/// GET /api/notes?search=&server_id=&limit=
async fn list_notes(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<NotesQuery>,
) -> ApiResult<Json<Vec<NoteResponse>>> {
    let notes = NoteService::list(state.db(), &user.discord_user_id, &query).await?;
    Ok(Json(notes))
}

/// Get one of the caller's notes
///
/// GET /api/notes/{id}
async fn get_note(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<NoteResponse>> {
    let note = NoteService::get(state.db(), &user.discord_user_id, &id).await?;
    Ok(Json(note))
}

/// Replace the content of one of the caller's notes
///
/// PUT /api/notes/{id}
async fn update_note(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateNoteRequest>,
) -> ApiResult<Json<NoteResponse>> {
    let note = NoteService::update(state.db(), &user.discord_user_id, &id, req).await?;
    Ok(Json(note))
}

/// Delete one of the caller's notes
///
/// DELETE /api/notes/{id}
async fn delete_note(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    NoteService::delete(state.db(), &user.discord_user_id, &id).await?;
    Ok(Json(MessageResponse {
        message: "Note deleted successfully".to_string(),
    }))
}
