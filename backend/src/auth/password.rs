//! Password hashing using bcrypt
//!
//! Provides secure password hashing and verification.
//!
//! # Performance Considerations
//!
//! Bcrypt is intentionally CPU-intensive. Handlers use the async wrappers,
//! which run the work on the blocking thread pool.

use anyhow::Result;
use bcrypt::DEFAULT_COST;

/// Password hashing service
///
/// Uses bcrypt with a per-hash random salt; stored hashes resist offline
/// brute force even if the database is exfiltrated.
pub struct PasswordService;

impl PasswordService {
    /// Hash a password using bcrypt (blocking operation)
    pub fn hash(password: &str) -> Result<String> {
        bcrypt::hash(password, DEFAULT_COST)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))
    }

    /// Hash a password asynchronously (non-blocking)
    ///
    /// Spawns the CPU-intensive work on a blocking thread pool,
    /// preventing it from blocking the async runtime.
    pub async fn hash_async(password: String) -> Result<String> {
        tokio::task::spawn_blocking(move || Self::hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Verify a password against a hash (blocking operation)
    ///
    /// A malformed hash is indistinguishable from a mismatch: both return
    /// false.
    pub fn verify(password: &str, hash: &str) -> bool {
        bcrypt::verify(password, hash).unwrap_or(false)
    }

    /// Verify a password asynchronously (non-blocking)
    ///
    /// Spawns the CPU-intensive work on a blocking thread pool.
    pub async fn verify_async(password: String, hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &hash))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))
    }
}
