//! Authentication middleware
//!
//! Provides the extractor that turns a bearer token into the user record it
//! belongs to. This is the only mechanism attributing a request to a user on
//! the authenticated surface.

use crate::error::ApiError;
use crate::repositories::UserRepository;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Authenticated user resolved from a bearer token
///
/// The token only proves possession of a Discord id; the user record is
/// loaded on every request, so a token for a since-deleted user fails with
/// 404 rather than 401.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub discord_user_id: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for CurrentUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // Extract Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing authorization header".to_string()))?;

        // Check Bearer prefix
        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Invalid authorization format".to_string()))?;

        // Malformed, tampered, and unsigned tokens all collapse to the same
        // response; the caller learns nothing about which check failed.
        let claims = app_state
            .jwt()
            .verify_token(token)
            .map_err(|_| ApiError::Unauthorized("Invalid authentication credentials".to_string()))?;

        let user = UserRepository::find_by_discord_id(app_state.db(), &claims.discord_user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(CurrentUser {
            id: user.id,
            discord_user_id: user.discord_user_id,
            username: user.username,
            created_at: user.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_user_debug_has_no_password() {
        // CurrentUser never carries the password hash
        let user = CurrentUser {
            id: Uuid::new_v4(),
            discord_user_id: "123456789012345678".to_string(),
            username: "Ann".to_string(),
            created_at: Utc::now(),
        };
        let debug_str = format!("{:?}", user);
        assert!(debug_str.contains("CurrentUser"));
        assert!(!debug_str.contains("password"));
    }
}
