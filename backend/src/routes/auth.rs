//! Authentication routes
//!
//! Provides endpoints for user registration, login, and the current-user
//! profile. Password hashing runs on the blocking thread pool and token
//! issuance uses the pre-computed keys from AppState.

use crate::auth::CurrentUser;
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use discord_notes_shared::types::{LoginRequest, RegisterRequest, Token, UserResponse};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", axum::routing::get(me))
}

/// Register a new user
///
/// POST /api/auth/register
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Json<Token>> {
    let token = UserService::register(state.db(), state.jwt(), &req).await?;
    Ok(Json(token))
}

/// Login with Discord id and password
///
/// POST /api/auth/login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<Token>> {
    let token = UserService::login(state.db(), state.jwt(), &req).await?;
    Ok(Json(token))
}

/// Get current user profile (requires authentication)
///
/// GET /api/auth/me
async fn me(user: CurrentUser) -> Json<UserResponse> {
    Json(UserResponse {
        id: user.id.to_string(),
        discord_user_id: user.discord_user_id,
        username: user.username,
        created_at: user.created_at,
    })
}
