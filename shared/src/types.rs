//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Access token returned by register/login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    /// Always "bearer"
    pub token_type: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub discord_user_id: String,
    pub username: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub discord_user_id: String,
    pub password: String,
}

/// User profile response (never carries the password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub discord_user_id: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// A stored note
///
/// `discord_user_id` is a write-once copy of the owner's Discord id so the
/// bot endpoints can query notes without resolving the user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteResponse {
    pub id: String,
    pub user_id: String,
    pub discord_user_id: String,
    pub content: String,
    pub server_id: Option<String>,
    pub server_name: Option<String>,
    pub channel_id: Option<String>,
    pub channel_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Note creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    pub discord_user_id: String,
    pub content: String,
    #[serde(default)]
    pub server_id: Option<String>,
    #[serde(default)]
    pub server_name: Option<String>,
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub channel_name: Option<String>,
}

/// Note update request; only the content can be replaced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNoteRequest {
    pub content: String,
}

/// Query parameters for listing the caller's notes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotesQuery {
    /// Case-insensitive substring match against content
    pub search: Option<String>,
    /// Exact match against server_id
    pub server_id: Option<String>,
    pub limit: Option<i64>,
}

/// Query parameters for the bot note listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotNotesQuery {
    pub limit: Option<i64>,
}

/// Query parameters for the bot note search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotSearchQuery {
    pub q: Option<String>,
    pub limit: Option<i64>,
}

/// Simple message response (e.g. for deletions and the API root)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// A validation failure tied to a single input field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
