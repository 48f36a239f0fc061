//! HTTP API contract tests.
//!
//! These drive the full router (middleware included) with in-process
//! requests and assert on status codes and response bodies.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use server::{build_router, ServerConfig, ServerState};
use tower::ServiceExt;

fn test_app() -> Router {
    let state = Arc::new(ServerState::new(ServerConfig::default()));
    build_router(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds"),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("request builds"),
    };

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request completes");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body is JSON")
    };

    (status, body)
}

async fn post_value(app: &Router, value: &str) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        "/strings",
        Some(json!({ "value": value })),
    )
    .await
}

#[tokio::test]
async fn post_analyzes_and_stores_a_string() {
    let app = test_app();
    let (status, body) = post_value(&app, "racecar").await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["value"], "racecar");
    assert_eq!(body["id"], body["properties"]["sha256_hash"]);
    assert_eq!(body["properties"]["length"], 7);
    assert_eq!(body["properties"]["is_palindrome"], true);
    assert_eq!(body["properties"]["word_count"], 1);
    assert_eq!(body["properties"]["unique_characters"], 4);
    assert_eq!(body["properties"]["character_frequency_map"]["r"], 2);

    let created_at = body["created_at"].as_str().expect("timestamp present");
    assert!(created_at.ends_with('Z'));
    assert_eq!(created_at.len(), 20);
}

#[tokio::test]
async fn post_duplicate_content_conflicts() {
    let app = test_app();
    let (first, _) = post_value(&app, "hello").await;
    assert_eq!(first, StatusCode::CREATED);

    let (second, body) = post_value(&app, "hello").await;
    assert_eq!(second, StatusCode::CONFLICT);
    assert_eq!(body["error"], "String already exists in the system");
}

#[tokio::test]
async fn post_rejects_malformed_bodies() {
    let app = test_app();

    // Not JSON at all
    let request = Request::builder()
        .method(Method::POST)
        .uri("/strings")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .expect("request builds");
    let response = app.clone().oneshot(request).await.expect("completes");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Missing value field
    let (status, body) = send(&app, Method::POST, "/strings", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    // Blank value
    let (status, _) = post_value(&app, "   ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn post_rejects_non_string_values() {
    let app = test_app();

    for value in [json!(42), json!(true), json!(["a"]), json!(null)] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/strings",
            Some(json!({ "value": value })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "for {value}");
        assert_eq!(body["error"], "Invalid data type for \"value\" (must be string)");
    }
}

#[tokio::test]
async fn get_by_value_round_trips() {
    let app = test_app();
    post_value(&app, "hello").await;

    let (status, body) = send(&app, Method::GET, "/strings/hello", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], "hello");
    assert_eq!(body["properties"]["unique_characters"], 4);
}

#[tokio::test]
async fn get_unknown_value_is_not_found() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/strings/ghost", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "String does not exist in the system");
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let app = test_app();
    post_value(&app, "hello").await;

    let (status, body) = send(&app, Method::DELETE, "/strings/hello", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::GET, "/strings/hello", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/strings/hello", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn filters_apply_conjunctively() {
    let app = test_app();
    post_value(&app, "racecar").await;
    post_value(&app, "hello").await;

    let (status, body) = send(&app, Method::GET, "/strings?min_length=5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert_eq!(body["filters_applied"], json!({ "min_length": 5 }));

    let (status, body) = send(&app, Method::GET, "/strings?is_palindrome=true", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["value"], "racecar");

    let (status, body) = send(
        &app,
        Method::GET,
        "/strings?is_palindrome=true&min_length=100",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
    assert_eq!(
        body["filters_applied"],
        json!({ "is_palindrome": true, "min_length": 100 })
    );
}

#[tokio::test]
async fn unfiltered_list_returns_everything() {
    let app = test_app();
    post_value(&app, "one").await;
    post_value(&app, "two").await;

    let (status, body) = send(&app, Method::GET, "/strings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert_eq!(body["filters_applied"], json!({}));
}

#[tokio::test]
async fn invalid_filter_parameters_are_rejected() {
    let app = test_app();

    for uri in [
        "/strings?is_palindrome=maybe",
        "/strings?min_length=abc",
        "/strings?max_length=-3",
        "/strings?word_count=1.5",
        "/strings?contains_character=ab",
        "/strings?contains_character=",
    ] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "for {uri}");
        assert_eq!(body["error"], "Invalid query parameter values or types");
    }
}

#[tokio::test]
async fn contains_character_is_case_insensitive() {
    let app = test_app();
    post_value(&app, "HELLO").await;

    let (status, body) = send(&app, Method::GET, "/strings?contains_character=h", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
}

#[tokio::test]
async fn natural_language_longer_than() {
    let app = test_app();
    post_value(&app, "racecar").await;
    post_value(&app, "hello").await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/strings/filter-by-natural-language?query=strings%20longer%20than%204",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert_eq!(
        body["interpreted_query"]["original"],
        "strings longer than 4"
    );
    assert_eq!(
        body["interpreted_query"]["parsed_filters"],
        json!({ "min_length": 5 })
    );
}

#[tokio::test]
async fn natural_language_first_vowel() {
    let app = test_app();
    post_value(&app, "racecar").await;
    post_value(&app, "hello").await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/strings/filter-by-natural-language?query=find%20palindromic%20words%20with%20the%20first%20vowel",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["value"], "racecar");
    assert_eq!(
        body["interpreted_query"]["parsed_filters"],
        json!({ "is_palindrome": true, "contains_character": "a" })
    );
}

#[tokio::test]
async fn natural_language_rejects_unparsable_queries() {
    let app = test_app();

    for uri in [
        "/strings/filter-by-natural-language",
        "/strings/filter-by-natural-language?query=",
        "/strings/filter-by-natural-language?query=what%20is%20love",
    ] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "for {uri}");
        assert_eq!(body["error"], "unable to parse natural language query");
    }
}

#[tokio::test]
async fn service_info_and_probes_respond() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Textvault Server");

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["stored_records"], 0);
}

#[tokio::test]
async fn empty_path_value_is_a_client_error() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/strings/", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing string value in path");

    let (status, _) = send(&app, Method::DELETE, "/strings/", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_routes_are_not_found() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn records_survive_failed_duplicate_inserts() {
    let app = test_app();
    let (_, original) = post_value(&app, "hello").await;
    post_value(&app, "hello").await;

    let (status, fetched) = send(&app, Method::GET, "/strings/hello", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["created_at"], original["created_at"]);
    assert_eq!(fetched["id"], original["id"]);
}
