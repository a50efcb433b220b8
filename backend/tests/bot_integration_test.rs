//! Integration tests for the unauthenticated bot surface

mod common;

use axum::http::StatusCode;
use serde_json::json;

async fn create_note(app: &common::TestApp, discord_id: &str, content: &str) -> serde_json::Value {
    let body = json!({
        "discord_user_id": discord_id,
        "content": content
    });
    let (status, response) = app.post("/api/notes", &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_str(&response).unwrap()
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_bot_lists_notes_without_token() {
    let app = common::TestApp::new().await;
    let discord_id = common::random_discord_id();

    create_note(&app, &discord_id, "first").await;
    create_note(&app, &discord_id, "second").await;

    let (status, response) = app.get(&format!("/api/bot/notes/{}", discord_id)).await;
    assert_eq!(status, StatusCode::OK);

    let notes: Vec<serde_json::Value> = serde_json::from_str(&response).unwrap();
    assert_eq!(notes.len(), 2);
    // Newest first
    assert_eq!(notes[0]["content"], "second");
    assert_eq!(notes[1]["content"], "first");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_bot_list_default_limit_is_ten() {
    let app = common::TestApp::new().await;
    let discord_id = common::random_discord_id();

    for i in 0..12 {
        create_note(&app, &discord_id, &format!("note {}", i)).await;
    }

    let (_, response) = app.get(&format!("/api/bot/notes/{}", discord_id)).await;
    let notes: Vec<serde_json::Value> = serde_json::from_str(&response).unwrap();
    assert_eq!(notes.len(), 10);

    let (_, response) = app
        .get(&format!("/api/bot/notes/{}?limit=3", discord_id))
        .await;
    let notes: Vec<serde_json::Value> = serde_json::from_str(&response).unwrap();
    assert_eq!(notes.len(), 3);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_bot_list_unknown_user_is_empty() {
    let app = common::TestApp::new().await;

    let (status, response) = app
        .get(&format!("/api/bot/notes/{}", common::random_discord_id()))
        .await;
    assert_eq!(status, StatusCode::OK);

    let notes: Vec<serde_json::Value> = serde_json::from_str(&response).unwrap();
    assert!(notes.is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_bot_search_matches_substring_with_default_limit_five() {
    let app = common::TestApp::new().await;
    let discord_id = common::random_discord_id();

    for i in 0..7 {
        create_note(&app, &discord_id, &format!("groceries run {}", i)).await;
    }
    create_note(&app, &discord_id, "unrelated").await;

    let (status, response) = app
        .get(&format!("/api/bot/notes/{}/search?q=GROCERIES", discord_id))
        .await;
    assert_eq!(status, StatusCode::OK);

    let notes: Vec<serde_json::Value> = serde_json::from_str(&response).unwrap();
    assert_eq!(notes.len(), 5);
    for note in &notes {
        assert!(note["content"].as_str().unwrap().contains("groceries"));
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_bot_search_requires_query() {
    let app = common::TestApp::new().await;

    let (status, _) = app
        .get(&format!(
            "/api/bot/notes/{}/search",
            common::random_discord_id()
        ))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_bot_delete_ignores_ownership() {
    let app = common::TestApp::new().await;
    let discord_id = common::random_discord_id();

    let note = create_note(&app, &discord_id, "anyone can delete this").await;
    let note_id = note["id"].as_str().unwrap();

    // No token, no Discord id: the bare note id is enough
    let (status, response) = app.delete(&format!("/api/bot/notes/{}", note_id)).await;
    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["message"], "Note deleted successfully");

    let (status, _) = app.delete(&format!("/api/bot/notes/{}", note_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_bot_delete_missing_note_is_not_found() {
    let app = common::TestApp::new().await;

    let (status, _) = app
        .delete(&format!("/api/bot/notes/{}", uuid::Uuid::new_v4()))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
