//! JWT token issuance and verification
//!
//! Tokens embed the caller's Discord user id and are signed with a
//! server-held symmetric secret. They carry no expiry: a token stays valid
//! for as long as the secret does, and there is no revocation list.

use anyhow::Result;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Discord user id of the token holder
    pub discord_user_id: String,
}

/// Pre-computed JWT keys for efficient token operations
/// These are expensive to create, so we cache them in AppState
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    /// Create new JWT keys from secret
    /// This should be called once at startup
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// JWT service for token operations
///
/// Uses pre-computed keys to avoid expensive key derivation
/// on every request. Keys are wrapped in Arc for cheap cloning.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    validation: Validation,
}

impl JwtService {
    /// Create a new JWT service with pre-computed keys
    ///
    /// Call this once at application startup and store in AppState.
    pub fn new(secret: &str) -> Self {
        // Tokens are issued without an exp claim, so expiry checks must be
        // disabled or every token would be rejected as missing one.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            keys: JwtKeys::new(secret),
            validation,
        }
    }

    /// Issue a token for a Discord user id
    #[inline]
    pub fn issue_token(&self, discord_user_id: &str) -> Result<String> {
        let claims = Claims {
            discord_user_id: discord_user_id.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, self.keys.encoding())
            .map_err(|e| anyhow::anyhow!("Failed to issue token: {}", e))
    }

    /// Verify a token and return its claims
    ///
    /// Fails on an invalid signature, wrong algorithm, malformed input, or
    /// a missing discord_user_id claim. Callers translate every failure to
    /// the same Unauthorized response.
    #[inline]
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, self.keys.decoding(), &self.validation)
            .map_err(|e| anyhow::anyhow!("Invalid token: {}", e))?;

        Ok(token_data.claims)
    }
}
