mod common;

use axum::http::StatusCode;
use card_ledger::services::token;
use common::{TEST_SECRET, error_code, test_app, test_app_with_ttl};
use serde_json::json;

#[tokio::test]
async fn register_returns_employee_without_credentials() {
    let app = test_app().await;

    let (status, body) = app
        .post(
            "/api/register",
            None,
            json!({
                "employee_id": "emp-104",
                "name": "Dana Osei",
                "email": "dana.osei@example.com",
                "password": "hunter2hunter2",
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["employee_id"], "emp-104");
    assert_eq!(body["name"], "Dana Osei");
    assert_eq!(body["email"], "dana.osei@example.com");
    assert_eq!(body["permissions"], json!(["processWithdrawal"]));

    // No credential material in any form
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn duplicate_employee_id_is_rejected() {
    let app = test_app().await;

    let register = |email: &str| {
        json!({
            "employee_id": "emp-104",
            "name": "Dana Osei",
            "email": email,
            "password": "hunter2hunter2",
        })
    };

    let (status, _) = app.post("/api/register", None, register("first@example.com")).await;
    assert_eq!(status, StatusCode::CREATED);

    // Same identifier, different email
    let (status, body) = app.post("/api/register", None, register("second@example.com")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "duplicate_employee");
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let app = test_app().await;

    let register = |employee_id: &str| {
        json!({
            "employee_id": employee_id,
            "name": "Dana Osei",
            "email": "dana.osei@example.com",
            "password": "hunter2hunter2",
        })
    };

    let (status, _) = app.post("/api/register", None, register("emp-104")).await;
    assert_eq!(status, StatusCode::CREATED);

    // Same email, different identifier
    let (status, body) = app.post("/api/register", None, register("emp-105")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "duplicate_employee");
}

#[tokio::test]
async fn login_issues_a_working_token() {
    let app = test_app().await;
    let token = app.register_and_login("emp-104", "dana.osei@example.com").await;

    // The token opens a protected route
    let (status, _) = app.get("/api/cards", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let app = test_app().await;
    app.register_and_login("emp-104", "dana.osei@example.com").await;

    // Wrong password for a known email
    let (wrong_status, wrong_body) = app
        .post(
            "/api/login",
            None,
            json!({"email": "dana.osei@example.com", "password": "not-the-password"}),
        )
        .await;

    // Unknown email entirely
    let (unknown_status, unknown_body) = app
        .post(
            "/api/login",
            None,
            json!({"email": "nobody@example.com", "password": "hunter2hunter2"}),
        )
        .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    // Identical envelope: no account-enumeration signal
    assert_eq!(wrong_body, unknown_body);
}

#[tokio::test]
async fn protected_routes_reject_missing_or_malformed_tokens() {
    let app = test_app().await;

    let (status, body) = app.get("/api/cards", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&body), "invalid_token");

    let (status, body) = app.get("/api/cards", Some("not-a-real-token")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&body), "invalid_token");
}

#[tokio::test]
async fn tokens_signed_with_another_secret_are_rejected() {
    let app = test_app().await;

    let forged = token::issue(
        "a-different-secret",
        "emp-104",
        vec!["processWithdrawal".to_string()],
        3600,
    );

    let (status, body) = app.get("/api/cards", Some(&forged)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&body), "invalid_token");
}

#[tokio::test]
async fn expired_tokens_are_rejected() {
    // Every token this app issues is already past its expiry
    let app = test_app_with_ttl(-60).await;
    let token = app.register_and_login("emp-104", "dana.osei@example.com").await;

    let (status, body) = app.get("/api/cards", Some(&token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&body), "token_expired");

    // Same secret, unexpired: proves only the expiry was at fault
    let fresh = token::issue(TEST_SECRET, "emp-104", vec![], 3600);
    let (status, _) = app.get("/api/cards", Some(&fresh)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn register_rejects_empty_fields() {
    let app = test_app().await;

    let (status, body) = app
        .post(
            "/api/register",
            None,
            json!({
                "employee_id": "",
                "name": "Dana Osei",
                "email": "dana.osei@example.com",
                "password": "hunter2hunter2",
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "invalid_request");
}
