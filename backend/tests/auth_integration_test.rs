//! Integration tests for authentication endpoints

mod common;

use axum::http::StatusCode;
use discord_notes_backend::auth::JwtService;
use serde_json::json;

const TEST_SECRET: &str = "test-secret-key-for-testing-only-32chars";

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_success_returns_verifiable_token() {
    let app = common::TestApp::new().await;

    let discord_id = common::random_discord_id();
    let body = json!({
        "discord_user_id": discord_id,
        "username": "Ann",
        "password": "secret1"
    });

    let (status, response) = app.post("/api/auth/register", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["token_type"], "bearer");

    // The token resolves back to the registered Discord id
    let token = response["access_token"].as_str().unwrap();
    let claims = JwtService::new(TEST_SECRET).verify_token(token).unwrap();
    assert_eq!(claims.discord_user_id, discord_id);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_duplicate_discord_id() {
    let app = common::TestApp::new().await;

    let body = json!({
        "discord_user_id": common::random_discord_id(),
        "username": "Ann",
        "password": "secret1"
    });

    // First registration should succeed
    let (status, _) = app.post("/api/auth/register", &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    // Second registration with same Discord id should fail with 400
    let (status, _) = app.post("/api/auth/register", &body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_invalid_discord_id() {
    let app = common::TestApp::new().await;

    for bad_id in ["abc", "123", "99999999999999999999", "10000000000000000"] {
        let body = json!({
            "discord_user_id": bad_id,
            "username": "Ann",
            "password": "secret1"
        });

        let (status, response) = app.post("/api/auth/register", &body.to_string()).await;
        assert_eq!(
            status,
            StatusCode::UNPROCESSABLE_ENTITY,
            "id {:?} should be rejected, got body {}",
            bad_id,
            response
        );
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_reports_all_invalid_fields() {
    let app = common::TestApp::new().await;

    let body = json!({
        "discord_user_id": "abc",
        "username": "x",
        "password": "short"
    });

    let (status, response) = app.post("/api/auth/register", &body.to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    let details = response["error"]["details"].as_array().unwrap();
    let fields: Vec<&str> = details.iter().map(|d| d["field"].as_str().unwrap()).collect();
    assert!(fields.contains(&"discord_user_id"));
    assert!(fields.contains(&"username"));
    assert!(fields.contains(&"password"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_success() {
    let app = common::TestApp::new().await;

    let discord_id = common::random_discord_id();
    let register_body = json!({
        "discord_user_id": discord_id,
        "username": "Ann",
        "password": "secret1"
    });
    app.post("/api/auth/register", &register_body.to_string()).await;

    let login_body = json!({
        "discord_user_id": discord_id,
        "password": "secret1"
    });
    let (status, response) = app.post("/api/auth/login", &login_body.to_string()).await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    let claims = JwtService::new(TEST_SECRET)
        .verify_token(response["access_token"].as_str().unwrap())
        .unwrap();
    assert_eq!(claims.discord_user_id, discord_id);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_wrong_password() {
    let app = common::TestApp::new().await;

    let discord_id = common::random_discord_id();
    let register_body = json!({
        "discord_user_id": discord_id,
        "username": "Ann",
        "password": "correct-password"
    });
    app.post("/api/auth/register", &register_body.to_string()).await;

    let login_body = json!({
        "discord_user_id": discord_id,
        "password": "wrong-password"
    });
    let (status, _) = app.post("/api/auth/login", &login_body.to_string()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_unknown_user() {
    let app = common::TestApp::new().await;

    let login_body = json!({
        "discord_user_id": common::random_discord_id(),
        "password": "whatever-password"
    });
    let (status, _) = app.post("/api/auth/login", &login_body.to_string()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_invalid_discord_id() {
    let app = common::TestApp::new().await;

    let login_body = json!({
        "discord_user_id": "123",
        "password": "secret1"
    });
    let (status, _) = app.post("/api/auth/login", &login_body.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_me_returns_profile_without_password_hash() {
    let app = common::TestApp::new().await;

    let discord_id = common::random_discord_id();
    let register_body = json!({
        "discord_user_id": discord_id,
        "username": "  Ann  ",
        "password": "secret1"
    });
    let (_, response) = app.post("/api/auth/register", &register_body.to_string()).await;
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    let token = response["access_token"].as_str().unwrap();

    let (status, me) = app.get_auth("/api/auth/me", token).await;
    assert_eq!(status, StatusCode::OK);

    let me: serde_json::Value = serde_json::from_str(&me).unwrap();
    assert_eq!(me["discord_user_id"], discord_id.as_str());
    // Username is stored trimmed
    assert_eq!(me["username"], "Ann");
    assert!(me.get("password_hash").is_none());
}
