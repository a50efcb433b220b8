//! User repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// User record from database
///
/// `password_hash` is NULL for users auto-provisioned by note creation;
/// they cannot pass the password login flow.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub discord_user_id: String,
    pub username: String,
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user
    pub async fn create(
        pool: &PgPool,
        discord_user_id: &str,
        username: &str,
        password_hash: Option<&str>,
    ) -> Result<UserRecord> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (discord_user_id, username, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, discord_user_id, username, password_hash, created_at
            "#,
        )
        .bind(discord_user_id)
        .bind(username)
        .bind(password_hash)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Create a placeholder user for a Discord id seen for the first time
    /// through note creation. No password is set.
    pub async fn create_placeholder(pool: &PgPool, discord_user_id: &str) -> Result<UserRecord> {
        let username = format!("User_{}", discord_user_id);
        Self::create(pool, discord_user_id, &username, None).await
    }

    /// Find user by Discord id
    pub async fn find_by_discord_id(
        pool: &PgPool,
        discord_user_id: &str,
    ) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, discord_user_id, username, password_hash, created_at
            FROM users
            WHERE discord_user_id = $1
            "#,
        )
        .bind(discord_user_id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Check if a Discord id is already registered
    ///
    /// This pre-check is the only duplicate guard; there is no unique index,
    /// so a concurrent register can still slip a duplicate through.
    pub async fn discord_id_exists(pool: &PgPool, discord_user_id: &str) -> Result<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE discord_user_id = $1)
            "#,
        )
        .bind(discord_user_id)
        .fetch_one(pool)
        .await?;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - see tests/auth_integration_test.rs
}
