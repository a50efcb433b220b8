//! Input validation functions
//!
//! Validation rules for the auth and note endpoints. Each function returns a
//! per-field message suitable for a 422 response.

/// Discord ids are snowflakes minted from 2015 onwards, so anything below
/// this value cannot be a real user id.
pub const MIN_DISCORD_USER_ID: u64 = 100_000_000_000_000_000;

/// Validate a Discord user id (snowflake rendered as a decimal string)
pub fn validate_discord_user_id(id: &str) -> Result<(), String> {
    if !id.chars().all(|c| c.is_ascii_digit()) || id.is_empty() {
        return Err("Discord User ID must contain only numbers".to_string());
    }
    if id.len() < 17 || id.len() > 19 {
        return Err("Discord User ID must be 17-19 digits long".to_string());
    }
    match id.parse::<u64>() {
        Ok(value) if value >= MIN_DISCORD_USER_ID => Ok(()),
        _ => Err("Invalid Discord User ID - ID too small".to_string()),
    }
}

/// Validate a username (2-32 chars after trimming surrounding whitespace)
pub fn validate_username(username: &str) -> Result<(), String> {
    let trimmed = username.trim();
    if trimmed.chars().count() < 2 {
        return Err("Username must be at least 2 characters long".to_string());
    }
    if trimmed.chars().count() > 32 {
        return Err("Username must be no more than 32 characters long".to_string());
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < 6 {
        return Err("Password must be at least 6 characters long".to_string());
    }
    Ok(())
}

/// Validate note content
pub fn validate_note_content(content: &str) -> Result<(), String> {
    if content.is_empty() {
        return Err("Note content must not be empty".to_string());
    }
    Ok(())
}
