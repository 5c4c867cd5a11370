//! End-to-end tests for the Signet HTTP surface
//!
//! Drives the real router in-process and checks both the success paths
//! and the normalized error envelope contract.

mod common;

use axum::http::{header::CONTENT_TYPE, StatusCode};
use serde_json::Value;

use common::{body_string, get, get_ok, test_app};

/// Parse an envelope body and assert the fixed outer shape
/// `{error: 1, errors: [..], data: null}`.
fn parse_envelope(body: &str) -> Value {
    let value: Value = serde_json::from_str(body).expect("error body must be JSON");
    assert_eq!(value["error"], 1);
    assert!(value["errors"].is_array());
    assert_eq!(value["errors"].as_array().unwrap().len(), 1);
    assert!(value["data"].is_null());
    value["errors"][0].clone()
}

#[tokio::test]
async fn test_public_pages() {
    let app = test_app();

    assert_eq!(get_ok(&app, "/").await, "Home Page");
    assert_eq!(get_ok(&app, "/users").await, "Users Page!");
}

#[tokio::test]
async fn test_public_key_endpoint() {
    let app = test_app();

    let response = get(&app, "/public", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    let body = body_string(response).await;
    assert!(body.starts_with("-----BEGIN PUBLIC KEY-----"));
}

#[tokio::test]
async fn test_sign_returns_plain_token() {
    let app = test_app();

    let response = get(&app, "/sign/alice", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    let token = body_string(response).await;
    // Compact JWS: three dot-separated base64url segments
    assert_eq!(token.split('.').count(), 3);
}

#[tokio::test]
async fn test_protected_endpoint_with_valid_token() {
    let app = test_app();

    let token = get_ok(&app, "/sign/alice").await;
    let response = get(&app, "/my-profile", Some(&format!("Bearer {token}"))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.starts_with("Users Page!"));
    assert!(body.contains("\"sub\":\"alice\""));
}

#[tokio::test]
async fn test_protected_endpoint_without_auth_header() {
    let app = test_app();

    let response = get(&app, "/my-profile", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let envelope = parse_envelope(&body_string(response).await);
    assert_eq!(envelope["code"], 401);
    assert_eq!(envelope["key"], "MISSING_AUTHORIZATION");
    assert!(envelope["message"].is_string());
}

#[tokio::test]
async fn test_protected_endpoint_with_malformed_header() {
    let app = test_app();

    let response = get(&app, "/my-profile", Some("Basic abc123")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let envelope = parse_envelope(&body_string(response).await);
    assert_eq!(envelope["key"], "INVALID_AUTHORIZATION");
}

#[tokio::test]
async fn test_protected_endpoint_with_garbage_token() {
    let app = test_app();

    let response = get(&app, "/my-profile", Some("Bearer not.a.token")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let envelope = parse_envelope(&body_string(response).await);
    assert_eq!(envelope["code"], 401);
    assert_eq!(envelope["key"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_unknown_path_gets_not_found_envelope() {
    let app = test_app();

    for path in ["/nope", "/users/42", "/sign", "/my-profile/extra"] {
        let response = get(&app, path, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {path}");

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("application/json"));

        let envelope = parse_envelope(&body_string(response).await);
        assert_eq!(envelope["code"], 404);
        assert_eq!(envelope["key"], "PAGE_NOT_FOUND");
    }
}

#[tokio::test]
async fn test_internal_error_degrades_to_500_envelope() {
    use signet_common::ApiError;

    // Bolt a failing route onto the real app; whatever a handler
    // raises must still come back as the canonical envelope
    let app = test_app().route(
        "/boom",
        axum::routing::get(|| async { ApiError::Internal(anyhow::anyhow!("wires crossed")) }),
    );

    let response = get(&app, "/boom", None).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let envelope = parse_envelope(&body_string(response).await);
    assert_eq!(envelope["code"], 500);
    assert_eq!(envelope["key"], "INTERNAL_SERVER_ERROR");
    // The original message text is surfaced to the client
    assert!(envelope["message"]
        .as_str()
        .unwrap()
        .contains("wires crossed"));
}

#[tokio::test]
async fn test_error_envelope_shape_is_exact() {
    let app = test_app();

    let response = get(&app, "/definitely-not-a-route", None).await;
    let value: Value = serde_json::from_str(&body_string(response).await).unwrap();

    // Exactly the three top-level fields, nothing else
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 3);
    assert!(object.contains_key("error"));
    assert!(object.contains_key("errors"));
    assert!(object.contains_key("data"));

    // Each envelope carries exactly code/key/message
    let envelope = value["errors"][0].as_object().unwrap();
    assert_eq!(envelope.len(), 3);
    assert!(envelope["code"].is_u64());
    assert!(envelope["key"].is_string());
    assert!(envelope["message"].is_string());
}
