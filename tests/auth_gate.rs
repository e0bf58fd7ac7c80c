//! Router behaviour that is decided before any store call.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;
use storefront_api::{
    auth::token::TokenService,
    routes::{MAX_BODY_BYTES, create_router},
};

use common::{SECRET, empty_request, json_request, offline_state, send};

fn unauthorized() -> serde_json::Value {
    json!({ "message": "Unauthorized" })
}

#[tokio::test]
async fn protected_route_without_header_is_unauthorized() {
    let app = create_router(offline_state());
    let (status, body) = send(app, empty_request("GET", "/users/carts", None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, unauthorized());
}

#[tokio::test]
async fn malformed_header_is_unauthorized() {
    for value in ["Basic dXNlcjpwYXNz", "Bearer", "token-without-scheme"] {
        let app = create_router(offline_state());
        let (status, body) = send(app, empty_request("GET", "/users/orders", Some(value))).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED, "{value:?}");
        assert_eq!(body, unauthorized());
    }
}

#[tokio::test]
async fn expired_and_tampered_tokens_get_identical_responses() {
    let tokens = TokenService::new(SECRET);
    let expired = tokens
        .issue_at(1, Utc::now() - Duration::hours(73))
        .unwrap()
        .token;
    let foreign = TokenService::new(b"some-other-secret-with-enough-bytes!")
        .issue(1)
        .unwrap()
        .token;

    let expired_header = format!("Bearer {expired}");
    let foreign_header = format!("Bearer {foreign}");

    let (expired_status, expired_body) = send(
        create_router(offline_state()),
        empty_request("GET", "/users/carts", Some(&expired_header)),
    )
    .await;
    let (foreign_status, foreign_body) = send(
        create_router(offline_state()),
        empty_request("GET", "/users/carts", Some(&foreign_header)),
    )
    .await;

    assert_eq!(expired_status, StatusCode::UNAUTHORIZED);
    assert_eq!(foreign_status, StatusCode::UNAUTHORIZED);
    assert_eq!(expired_body, foreign_body);
    assert_eq!(expired_body, unauthorized());
}

#[tokio::test]
async fn gate_runs_before_body_parsing() {
    let app = create_router(offline_state());
    let request = json_request("POST", "/users/carts", None, json!({ "nonsense": true }));
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, unauthorized());
}

#[tokio::test]
async fn every_protected_route_is_gated() {
    for (method, uri) in [
        ("GET", "/users/carts"),
        ("POST", "/users/carts"),
        ("DELETE", "/users/carts/1"),
        ("GET", "/users/orders"),
        ("POST", "/users/orders"),
    ] {
        let app = create_router(offline_state());
        let (status, _) = send(app, empty_request(method, uri, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
    }
}

#[tokio::test]
async fn add_to_cart_validates_quantity() {
    let token = TokenService::new(SECRET).issue(1).unwrap().token;
    let app = create_router(offline_state());
    let request = json_request(
        "POST",
        "/users/carts",
        Some(&token),
        json!({ "product_id": 1, "quantity": 0 }),
    );
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "quantity must be greater than 0" }));
}

#[tokio::test]
async fn non_numeric_cart_id_is_bad_request() {
    let token = TokenService::new(SECRET).issue(1).unwrap().token;
    let header = format!("Bearer {token}");
    let app = create_router(offline_state());
    let (status, body) = send(
        app,
        empty_request("DELETE", "/users/carts/abc", Some(&header)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Invalid path parameter" }));
}

#[tokio::test]
async fn register_rejects_invalid_email() {
    let app = create_router(offline_state());
    let request = json_request(
        "POST",
        "/users/register",
        None,
        json!({ "name": "A", "email": "not-an-email", "password": "secret1" }),
    );
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "email is not valid" }));
}

#[tokio::test]
async fn register_rejects_missing_fields_as_json() {
    let app = create_router(offline_state());
    let request = json_request(
        "POST",
        "/users/register",
        None,
        json!({ "email": "a@x.com" }),
    );
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().expect("message");
    assert!(message.starts_with("Invalid request body"), "{message}");
}

#[tokio::test]
async fn unknown_route_is_json_not_found() {
    let app = create_router(offline_state());
    let (status, body) = send(app, empty_request("GET", "/nope", None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Not Found" }));
}

#[tokio::test]
async fn health_reports_unreachable_database() {
    let app = create_router(offline_state());
    let (status, body) = send(app, empty_request("GET", "/health", None)).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["data"]["status"], "degraded");
    assert_eq!(body["data"]["database"], "down");
}

#[tokio::test]
async fn bad_product_query_is_json_bad_request() {
    let app = create_router(offline_state());
    let (status, body) = send(app, empty_request("GET", "/products?page=abc", None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Invalid query parameter" }));
}

#[tokio::test]
async fn wrong_method_is_json_method_not_allowed() {
    for (method, uri) in [("PUT", "/products"), ("DELETE", "/users/register")] {
        let app = create_router(offline_state());
        let (status, body) = send(app, empty_request(method, uri, None)).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method} {uri}");
        assert_eq!(body, json!({ "message": "Method Not Allowed" }));
    }
}

#[tokio::test]
async fn oversized_body_is_json_bad_request() {
    let app = create_router(offline_state());
    let request = json_request(
        "POST",
        "/users/register",
        None,
        json!({
            "name": "x".repeat(MAX_BODY_BYTES + 1),
            "email": "a@x.com",
            "password": "pw",
        }),
    );
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().expect("message");
    assert!(message.starts_with("Invalid request body"), "{message}");
}
