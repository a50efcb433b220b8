//! Note service
//!
//! Owner-scoped CRUD for the authenticated surface plus the unauthenticated
//! bot operations. Ownership failures are reported as NotFound so callers
//! cannot probe for the existence of other users' notes.

use crate::error::ApiError;
use crate::repositories::{NewNote, NoteRepository, UserRepository};
use discord_notes_shared::types::{
    BotNotesQuery, BotSearchQuery, CreateNoteRequest, FieldError, NoteResponse, NotesQuery,
    UpdateNoteRequest,
};
use discord_notes_shared::validation::{validate_discord_user_id, validate_note_content};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

const DEFAULT_LIST_LIMIT: i64 = 100;
const DEFAULT_BOT_LIST_LIMIT: i64 = 10;
const DEFAULT_BOT_SEARCH_LIMIT: i64 = 5;

/// Note service
pub struct NoteService;

impl NoteService {
    /// Create a note, auto-provisioning the owner if the Discord id has
    /// never been seen
    pub async fn create(pool: &PgPool, req: CreateNoteRequest) -> Result<NoteResponse, ApiError> {
        let mut errors = Vec::new();
        if let Err(msg) = validate_discord_user_id(&req.discord_user_id) {
            errors.push(FieldError::new("discord_user_id", msg));
        }
        if let Err(msg) = validate_note_content(&req.content) {
            errors.push(FieldError::new("content", msg));
        }
        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }

        let user = match UserRepository::find_by_discord_id(pool, &req.discord_user_id)
            .await
            .map_err(ApiError::Internal)?
        {
            Some(user) => user,
            None => {
                info!(discord_user_id = %req.discord_user_id, "Auto-provisioning user for note creation");
                UserRepository::create_placeholder(pool, &req.discord_user_id)
                    .await
                    .map_err(ApiError::Internal)?
            }
        };

        // The note carries the owner's Discord id alongside user_id so the
        // bot surface can query without resolving the user record.
        let note = NoteRepository::create(
            pool,
            NewNote {
                user_id: user.id,
                discord_user_id: user.discord_user_id,
                content: req.content,
                server_id: req.server_id,
                server_name: req.server_name,
                channel_id: req.channel_id,
                channel_name: req.channel_name,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(note.into())
    }

    /// List the caller's notes with optional search and server filters
    pub async fn list(
        pool: &PgPool,
        discord_user_id: &str,
        query: &NotesQuery,
    ) -> Result<Vec<NoteResponse>, ApiError> {
        let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT);
        let notes = NoteRepository::list(
            pool,
            discord_user_id,
            query.search.as_deref(),
            query.server_id.as_deref(),
            limit,
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(notes.into_iter().map(Into::into).collect())
    }

    /// Get one of the caller's notes by id
    pub async fn get(
        pool: &PgPool,
        discord_user_id: &str,
        note_id: &str,
    ) -> Result<NoteResponse, ApiError> {
        let id = parse_note_id(note_id)?;
        let note = NoteRepository::find_owned(pool, id, discord_user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(note_not_found)?;

        Ok(note.into())
    }

    /// Replace the content of one of the caller's notes
    pub async fn update(
        pool: &PgPool,
        discord_user_id: &str,
        note_id: &str,
        req: UpdateNoteRequest,
    ) -> Result<NoteResponse, ApiError> {
        if let Err(msg) = validate_note_content(&req.content) {
            return Err(ApiError::validation("content", msg));
        }

        let id = parse_note_id(note_id)?;
        let note = NoteRepository::update_content(pool, id, discord_user_id, &req.content)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(note_not_found)?;

        Ok(note.into())
    }

    /// Delete one of the caller's notes
    pub async fn delete(
        pool: &PgPool,
        discord_user_id: &str,
        note_id: &str,
    ) -> Result<(), ApiError> {
        let id = parse_note_id(note_id)?;
        let deleted = NoteRepository::delete_owned(pool, id, discord_user_id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(note_not_found());
        }
        Ok(())
    }

    /// Bot surface: list notes for a Discord id, newest first
    pub async fn bot_list(
        pool: &PgPool,
        discord_user_id: &str,
        query: &BotNotesQuery,
    ) -> Result<Vec<NoteResponse>, ApiError> {
        let limit = query.limit.unwrap_or(DEFAULT_BOT_LIST_LIMIT);
        let notes = NoteRepository::list(pool, discord_user_id, None, None, limit)
            .await
            .map_err(ApiError::Internal)?;

        Ok(notes.into_iter().map(Into::into).collect())
    }

    /// Bot surface: search notes for a Discord id
    pub async fn bot_search(
        pool: &PgPool,
        discord_user_id: &str,
        query: &BotSearchQuery,
    ) -> Result<Vec<NoteResponse>, ApiError> {
        let q = query
            .q
            .as_deref()
            .ok_or_else(|| ApiError::validation("q", "Search query is required"))?;

        let limit = query.limit.unwrap_or(DEFAULT_BOT_SEARCH_LIMIT);
        let notes = NoteRepository::list(pool, discord_user_id, Some(q), None, limit)
            .await
            .map_err(ApiError::Internal)?;

        Ok(notes.into_iter().map(Into::into).collect())
    }

    /// Bot surface: delete a note by id alone, with no ownership check
    pub async fn bot_delete(pool: &PgPool, note_id: &str) -> Result<(), ApiError> {
        let id = parse_note_id(note_id)?;
        let deleted = NoteRepository::delete_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(note_not_found());
        }
        Ok(())
    }
}

/// Note ids are UUIDs; anything else cannot name a note, so it gets the
/// same NotFound as a well-formed id that matches nothing.
fn parse_note_id(note_id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(note_id).map_err(|_| note_not_found())
}

fn note_not_found() -> ApiError {
    ApiError::NotFound("Note not found".to_string())
}
