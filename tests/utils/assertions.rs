//! Test assertion helpers for HTTP responses
#![allow(dead_code)] // Test utilities may not all be used in every test

use axum::http::StatusCode;
use serde_json::Value;

/// Assert an error response with the given status whose message mentions `fragment`
pub fn assert_error(response: &(StatusCode, Value), status: StatusCode, fragment: &str) {
    let (actual, body) = response;
    assert_eq!(*actual, status, "unexpected status, body: {body}");

    let message = body["error"].as_str().unwrap_or_default();
    assert!(
        message.contains(fragment),
        "error {message:?} should mention {fragment:?}"
    );
}

/// Assert a standings array lists `(player_id, total)` pairs in this order
pub fn assert_ranked(standings: &Value, expected: &[(&str, i64)]) {
    let rows = standings.as_array().expect("standings should be an array");
    let actual: Vec<(&str, i64)> = rows
        .iter()
        .map(|row| {
            (
                row["player_id"].as_str().unwrap_or_default(),
                row["total"].as_i64().unwrap_or_default(),
            )
        })
        .collect();
    assert_eq!(actual, expected);

    for (index, row) in rows.iter().enumerate() {
        assert_eq!(row["rank"].as_u64(), Some(index as u64 + 1));
    }
}
