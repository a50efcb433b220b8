//! Bot routes (unauthenticated surface)
//!
//! These endpoints trust their caller: the bot process is expected to be
//! the only client, and nothing here checks a token or ownership. Mounting
//! is controlled by server.expose_bot_api.

use crate::error::ApiResult;
use crate::services::NoteService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use discord_notes_shared::types::{BotNotesQuery, BotSearchQuery, MessageResponse, NoteResponse};

/// Create bot routes
///
/// GET interprets the path parameter as a Discord user id, DELETE as a
/// note id; the shapes share one route because the paths overlap.
pub fn bot_routes() -> Router<AppState> {
    Router::new()
        .route("/notes/:id", get(notes_for_user).delete(delete_note))
        .route("/notes/:id/search", get(search_notes))
}

/// List a user's notes by Discord id, newest first (default limit 10)
///
/// GET /api/bot/notes/{discord_user_id}
async fn notes_for_user(
    State(state): State<AppState>,
    Path(discord_user_id): Path<String>,
    Query(query): Query<BotNotesQuery>,
) -> ApiResult<Json<Vec<NoteResponse>>> {
    let notes = NoteService::bot_list(state.db(), &discord_user_id, &query).await?;
    Ok(Json(notes))
}

/// Search a user's notes by Discord id (default limit 5)
///
/// GET /api/bot/notes/{discord_user_id}/search?q=
async fn search_notes(
    State(state): State<AppState>,
    Path(discord_user_id): Path<String>,
    Query(query): Query<BotSearchQuery>,
) -> ApiResult<Json<Vec<NoteResponse>>> {
    let notes = NoteService::bot_search(state.db(), &discord_user_id, &query).await?;
    Ok(Json(notes))
}

/// Delete a note by id alone; any caller knowing an id may delete it
///
/// DELETE /api/bot/notes/{note_id}
async fn delete_note(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    NoteService::bot_delete(state.db(), &note_id).await?;
    Ok(Json(MessageResponse {
        message: "Note deleted successfully".to_string(),
    }))
}
