//! Note repository for database operations
//!
//! Every note query on the user-facing surface is scoped by both the note
//! id and the caller's Discord id, so a foreign note is indistinguishable
//! from a missing one. The bot surface queries by Discord id (or bare note
//! id for deletes) without ownership checks.

use anyhow::Result;
use chrono::{DateTime, Utc};
use discord_notes_shared::types::NoteResponse;
use sqlx::PgPool;
use uuid::Uuid;

/// Note record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct NoteRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub discord_user_id: String,
    pub content: String,
    pub server_id: Option<String>,
    pub server_name: Option<String>,
    pub channel_id: Option<String>,
    pub channel_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<NoteRecord> for NoteResponse {
    fn from(record: NoteRecord) -> Self {
        NoteResponse {
            id: record.id.to_string(),
            user_id: record.user_id.to_string(),
            discord_user_id: record.discord_user_id,
            content: record.content,
            server_id: record.server_id,
            server_name: record.server_name,
            channel_id: record.channel_id,
            channel_name: record.channel_name,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Input for creating a note
///
/// `discord_user_id` must equal the Discord id of the user `user_id`
/// references; the pair is written once and never updated independently.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub user_id: Uuid,
    pub discord_user_id: String,
    pub content: String,
    pub server_id: Option<String>,
    pub server_name: Option<String>,
    pub channel_id: Option<String>,
    pub channel_name: Option<String>,
}

/// Note repository for database operations
pub struct NoteRepository;

impl NoteRepository {
    /// Insert a new note
    pub async fn create(pool: &PgPool, new: NewNote) -> Result<NoteRecord> {
        let note = sqlx::query_as::<_, NoteRecord>(
            r#"
            INSERT INTO notes (user_id, discord_user_id, content,
                               server_id, server_name, channel_id, channel_name)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, discord_user_id, content,
                      server_id, server_name, channel_id, channel_name,
                      created_at, updated_at
            "#,
        )
        .bind(new.user_id)
        .bind(&new.discord_user_id)
        .bind(&new.content)
        .bind(&new.server_id)
        .bind(&new.server_name)
        .bind(&new.channel_id)
        .bind(&new.channel_name)
        .fetch_one(pool)
        .await?;

        Ok(note)
    }

    /// List notes for a Discord id, newest first
    ///
    /// `search` is a case-insensitive substring match against content,
    /// `server_id` an exact match.
    pub async fn list(
        pool: &PgPool,
        discord_user_id: &str,
        search: Option<&str>,
        server_id: Option<&str>,
        limit: i64,
    ) -> Result<Vec<NoteRecord>> {
        let notes = sqlx::query_as::<_, NoteRecord>(
            r#"
            SELECT id, user_id, discord_user_id, content,
                   server_id, server_name, channel_id, channel_name,
                   created_at, updated_at
            FROM notes
            WHERE discord_user_id = $1
              AND ($2::TEXT IS NULL OR content ILIKE '%' || $2 || '%')
              AND ($3::TEXT IS NULL OR server_id = $3)
            ORDER BY created_at DESC
            LIMIT $4
            "#,
        )
        .bind(discord_user_id)
        .bind(search)
        .bind(server_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(notes)
    }

    /// Find a note by id, scoped to its owner's Discord id
    pub async fn find_owned(
        pool: &PgPool,
        id: Uuid,
        discord_user_id: &str,
    ) -> Result<Option<NoteRecord>> {
        let note = sqlx::query_as::<_, NoteRecord>(
            r#"
            SELECT id, user_id, discord_user_id, content,
                   server_id, server_name, channel_id, channel_name,
                   created_at, updated_at
            FROM notes
            WHERE id = $1 AND discord_user_id = $2
            "#,
        )
        .bind(id)
        .bind(discord_user_id)
        .fetch_optional(pool)
        .await?;

        Ok(note)
    }

    /// Replace a note's content and bump updated_at, scoped to its owner
    pub async fn update_content(
        pool: &PgPool,
        id: Uuid,
        discord_user_id: &str,
        content: &str,
    ) -> Result<Option<NoteRecord>> {
        let note = sqlx::query_as::<_, NoteRecord>(
            r#"
            UPDATE notes
            SET content = $3, updated_at = NOW()
            WHERE id = $1 AND discord_user_id = $2
            RETURNING id, user_id, discord_user_id, content,
                      server_id, server_name, channel_id, channel_name,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(discord_user_id)
        .bind(content)
        .fetch_optional(pool)
        .await?;

        Ok(note)
    }

    /// Delete a note by id, scoped to its owner's Discord id
    pub async fn delete_owned(pool: &PgPool, id: Uuid, discord_user_id: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM notes WHERE id = $1 AND discord_user_id = $2
            "#,
        )
        .bind(id)
        .bind(discord_user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a note by id alone (bot path, no ownership check)
    pub async fn delete_by_id(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM notes WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_record_into_response() {
        let now = Utc::now();
        let record = NoteRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            discord_user_id: "123456789012345678".to_string(),
            content: "buy milk".to_string(),
            server_id: Some("42".to_string()),
            server_name: None,
            channel_id: None,
            channel_name: None,
            created_at: now,
            updated_at: now,
        };

        let response: NoteResponse = record.clone().into();
        assert_eq!(response.id, record.id.to_string());
        assert_eq!(response.user_id, record.user_id.to_string());
        assert_eq!(response.discord_user_id, "123456789012345678");
        assert_eq!(response.server_id.as_deref(), Some("42"));
    }
}
