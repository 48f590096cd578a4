//! Test app setup - drives the full router in-process with `oneshot`
#![allow(dead_code)] // Test utilities may not all be used in every test

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

use scorepad::{app, AppState, InMemoryGameRepository};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let state = AppState::new(Arc::new(InMemoryGameRepository::new()));
        Self { router: app(state) }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()))
        };
        (status, value)
    }

    fn with_json(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Self::with_json("POST", uri, body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Self::with_json("PATCH", uri, body)).await
    }

    /// Creates a game and returns its id
    pub async fn create_game(&self, body: Value) -> String {
        let (status, game) = self.post("/games", body).await;
        assert_eq!(status, StatusCode::CREATED, "game creation failed: {game}");
        game["id"].as_str().unwrap().to_string()
    }

    pub async fn name_player(&self, game_id: &str, player_id: &str, name: &str) {
        let (status, body) = self
            .patch(
                &format!("/games/{game_id}/players/{player_id}"),
                json!({ "name": name }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "rename failed: {body}");
    }

    /// Posts a score action and returns the response body
    pub async fn act(&self, game_id: &str, player_id: &str, action: Value) -> (StatusCode, Value) {
        self.post(
            &format!("/games/{game_id}/players/{player_id}/actions"),
            action,
        )
        .await
    }

    pub async fn set_count(&self, game_id: &str, player_id: &str, counter: &str, value: i64) {
        let (status, body) = self
            .act(
                game_id,
                player_id,
                json!({ "action": "set_count", "counter": counter, "value": value }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "set_count failed: {body}");
    }
}
