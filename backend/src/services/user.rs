//! User service for registration and login
//!
//! Password hashing and verification run on the blocking thread pool; the
//! JWT service is passed by reference with its pre-computed keys.

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::UserRepository;
use discord_notes_shared::types::{FieldError, LoginRequest, RegisterRequest, Token};
use discord_notes_shared::validation::{
    validate_discord_user_id, validate_password, validate_username,
};
use sqlx::PgPool;

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user
    ///
    /// Validation failures are aggregated per field. A duplicate Discord id
    /// is a Conflict; the check is not atomic with the insert, so a
    /// concurrent register of the same id can race through.
    pub async fn register(
        pool: &PgPool,
        jwt_service: &JwtService,
        req: &RegisterRequest,
    ) -> Result<Token, ApiError> {
        let mut errors = Vec::new();
        if let Err(msg) = validate_discord_user_id(&req.discord_user_id) {
            errors.push(FieldError::new("discord_user_id", msg));
        }
        if let Err(msg) = validate_username(&req.username) {
            errors.push(FieldError::new("username", msg));
        }
        if let Err(msg) = validate_password(&req.password) {
            errors.push(FieldError::new("password", msg));
        }
        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }

        // Check if the Discord id is already registered
        if UserRepository::discord_id_exists(pool, &req.discord_user_id)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict("User already exists".to_string()));
        }

        // Hash password on blocking thread pool (CPU-intensive)
        let password_hash = PasswordService::hash_async(req.password.clone())
            .await
            .map_err(ApiError::Internal)?;

        // Create user with the trimmed username
        let user = UserRepository::create(
            pool,
            &req.discord_user_id,
            req.username.trim(),
            Some(&password_hash),
        )
        .await
        .map_err(ApiError::Internal)?;

        let access_token = jwt_service
            .issue_token(&user.discord_user_id)
            .map_err(ApiError::Internal)?;

        Ok(Token {
            access_token,
            token_type: "bearer".to_string(),
        })
    }

    /// Login with Discord id and password
    ///
    /// An unknown Discord id is NotFound; a wrong password (including a
    /// password attempt against an auto-provisioned user, which has no
    /// password at all) is Unauthorized.
    pub async fn login(
        pool: &PgPool,
        jwt_service: &JwtService,
        req: &LoginRequest,
    ) -> Result<Token, ApiError> {
        if let Err(msg) = validate_discord_user_id(&req.discord_user_id) {
            return Err(ApiError::validation("discord_user_id", msg));
        }

        let user = UserRepository::find_by_discord_id(pool, &req.discord_user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        // Verify password on blocking thread pool (CPU-intensive)
        let valid = match user.password_hash {
            Some(hash) => PasswordService::verify_async(req.password.clone(), hash)
                .await
                .map_err(ApiError::Internal)?,
            None => false,
        };

        if !valid {
            return Err(ApiError::Unauthorized("Invalid password".to_string()));
        }

        // Stateless issuance: every login mints a fresh token and any number
        // of previously issued tokens stay valid.
        let access_token = jwt_service
            .issue_token(&user.discord_user_id)
            .map_err(ApiError::Internal)?;

        Ok(Token {
            access_token,
            token_type: "bearer".to_string(),
        })
    }
}
