mod common;

use axum::http::StatusCode;
use common::{error_code, test_app};
use serde_json::json;

#[tokio::test]
async fn create_and_fetch_card() {
    let app = test_app().await;
    let token = app.register_and_login("emp-104", "teller@example.com").await;

    let (status, body) = app
        .post(
            "/api/cards",
            Some(&token),
            json!({
                "card_number": "4000-0001",
                "holder_name": "Dana Osei",
                "initial_balance_cents": 10000,
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["card_number"], "4000-0001");
    assert_eq!(body["holder_name"], "Dana Osei");
    assert_eq!(body["balance_cents"], 10000);

    let (status, body) = app.get("/api/cards/4000-0001", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["balance_cents"], 10000);
}

#[tokio::test]
async fn opening_balance_defaults_to_zero() {
    let app = test_app().await;
    let token = app.register_and_login("emp-104", "teller@example.com").await;

    let (status, body) = app
        .post(
            "/api/cards",
            Some(&token),
            json!({"card_number": "4000-0002", "holder_name": "Dana Osei"}),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["balance_cents"], 0);
}

#[tokio::test]
async fn duplicate_card_number_is_rejected() {
    let app = test_app().await;
    let token = app.register_and_login("emp-104", "teller@example.com").await;
    app.create_card(&token, "4000-0003", 5000).await;

    let (status, body) = app
        .post(
            "/api/cards",
            Some(&token),
            json!({"card_number": "4000-0003", "holder_name": "Someone Else"}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "duplicate_card");

    // The original card is untouched
    assert_eq!(app.balance(&token, "4000-0003").await, 5000);
}

#[tokio::test]
async fn negative_opening_balance_is_rejected() {
    let app = test_app().await;
    let token = app.register_and_login("emp-104", "teller@example.com").await;

    let (status, body) = app
        .post(
            "/api/cards",
            Some(&token),
            json!({
                "card_number": "4000-0004",
                "holder_name": "Dana Osei",
                "initial_balance_cents": -100,
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "invalid_request");
}

#[tokio::test]
async fn list_cards_returns_every_card() {
    let app = test_app().await;
    let token = app.register_and_login("emp-104", "teller@example.com").await;

    app.create_card(&token, "4000-0005", 100).await;
    app.create_card(&token, "4000-0006", 200).await;
    app.create_card(&token, "4000-0007", 300).await;

    let (status, body) = app.get("/api/cards", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);

    let cards = body.as_array().unwrap();
    assert_eq!(cards.len(), 3);

    let mut numbers: Vec<&str> = cards
        .iter()
        .map(|c| c["card_number"].as_str().unwrap())
        .collect();
    numbers.sort();
    assert_eq!(numbers, vec!["4000-0005", "4000-0006", "4000-0007"]);
}

#[tokio::test]
async fn unknown_card_is_not_found() {
    let app = test_app().await;
    let token = app.register_and_login("emp-104", "teller@example.com").await;

    let (status, body) = app.get("/api/cards/no-such-card", Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&body), "card_not_found");

    let (status, _) = app.get("/api/cards/no-such-card/transactions", Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
