// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use card_ledger::{app, config::Config, db, state::AppState};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

/// Signing secret used by every test app. Tests that need to forge or
/// mis-sign tokens reference it directly.
pub const TEST_SECRET: &str = "integration-test-signing-secret";

/// A fully wired application over a throwaway database.
///
/// The TempDir keeps the database file alive for the duration of the test.
pub struct TestApp {
    pub router: Router,
    _temp_dir: TempDir,
}

/// Build a test app with the default one-hour token TTL.
pub async fn test_app() -> TestApp {
    test_app_with_ttl(3600).await
}

/// Build a test app with a custom token TTL (negative TTL mints
/// already-expired tokens, used by the expiry tests).
pub async fn test_app_with_ttl(token_ttl_secs: i64) -> TestApp {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let database_url = format!("sqlite://{}", db_path.display());

    let pool = db::create_pool(&database_url).await.unwrap();
    db::run_migrations(&pool).await.unwrap();

    let config = Config {
        database_url,
        token_secret: TEST_SECRET.to_string(),
        server_port: 0,
        token_ttl_secs,
    };

    TestApp {
        router: app::build_router(AppState::new(pool, config)),
        _temp_dir: temp_dir,
    }
}

impl TestApp {
    /// POST a JSON body, optionally with a bearer token.
    pub async fn post(&self, path: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = builder.body(Body::from(body.to_string())).unwrap();
        send(self.router.clone(), request).await
    }

    /// GET a path, optionally with a bearer token.
    pub async fn get(&self, path: &str, token: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method("GET").uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = builder.body(Body::empty()).unwrap();
        send(self.router.clone(), request).await
    }

    /// Register an employee and log in, returning the session token.
    pub async fn register_and_login(&self, employee_id: &str, email: &str) -> String {
        let (status, _) = self
            .post(
                "/api/register",
                None,
                json!({
                    "employee_id": employee_id,
                    "name": "Test Teller",
                    "email": email,
                    "password": "hunter2hunter2",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = self
            .post(
                "/api/login",
                None,
                json!({
                    "email": email,
                    "password": "hunter2hunter2",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);

        body["token"].as_str().unwrap().to_string()
    }

    /// Issue a card with an opening balance; asserts creation succeeded.
    pub async fn create_card(&self, token: &str, card_number: &str, balance_cents: i64) {
        let (status, _) = self
            .post(
                "/api/cards",
                Some(token),
                json!({
                    "card_number": card_number,
                    "holder_name": "Test Holder",
                    "initial_balance_cents": balance_cents,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    /// Current balance of a card, read back through the API.
    pub async fn balance(&self, token: &str, card_number: &str) -> i64 {
        let (status, body) = self.get(&format!("/api/cards/{card_number}"), Some(token)).await;
        assert_eq!(status, StatusCode::OK);
        body["balance_cents"].as_i64().unwrap()
    }
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Extract the machine-readable error code from an error envelope.
pub fn error_code(body: &Value) -> &str {
    body["error"]["code"].as_str().unwrap_or("")
}
