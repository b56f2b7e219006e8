//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use sqlx::error::{DatabaseError as _, ErrorKind};

/// Application-wide error type.
///
/// This enum represents all possible errors that can occur in the application.
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Database Errors**: Any sqlx::Error from database operations
/// - **Authentication Errors**: Bad credentials, bad or expired tokens
/// - **Authorization Errors**: Valid session lacking a required permission
/// - **Resource Errors**: Requested resources not found
/// - **Business Logic Errors**: Operations that violate business rules
/// - **Validation Errors**: Invalid request data
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    ///
    /// This wraps any sqlx::Error using the `#[from]` attribute, which
    /// automatically implements `From<sqlx::Error> for AppError`.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failed.
    ///
    /// Returns HTTP 500; the client is never told why.
    #[error("Password hashing failed")]
    PasswordHash,

    /// Login failed.
    ///
    /// Used for both unknown email and wrong password so that the response
    /// carries no account-enumeration signal. Returns HTTP 401.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Session token is missing, malformed, or its signature does not verify.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Invalid token")]
    InvalidToken,

    /// Session token is well-formed and correctly signed but past its expiry.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Token expired")]
    TokenExpired,

    /// Authenticated session lacks the permission required by the route.
    ///
    /// Returns HTTP 403 Forbidden.
    #[error("Permission denied")]
    PermissionDenied,

    /// Requested employee does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Employee not found")]
    EmployeeNotFound,

    /// Requested card does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Card not found")]
    CardNotFound,

    /// An employee with the same identifier or email already exists.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Employee already exists")]
    DuplicateEmployee,

    /// A card with the same card number already exists.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Card already exists")]
    DuplicateCard,

    /// A branch with the same identifier already exists.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Branch already exists")]
    DuplicateBranch,

    /// Card balance is lower than the requested withdrawal amount.
    ///
    /// Returns HTTP 400 Bad Request. The balance is left unchanged.
    #[error("Insufficient balance")]
    InsufficientBalance,

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("Invalid request")]
    InvalidRequest(String),
}

/// True when `err` is a unique-constraint violation from the database.
///
/// Creation endpoints rely on UNIQUE/PRIMARY KEY constraints for duplicate
/// detection instead of a read-then-insert check, so this is how a
/// duplicate surfaces.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err.as_database_error().map(|db| db.kind()),
        Some(ErrorKind::UniqueViolation)
    )
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map each error variant to (HTTP status, error code, message)
        let (status, code, message) = match self {
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "invalid_credentials",
                self.to_string(),
            ),
            AppError::InvalidToken => {
                (StatusCode::UNAUTHORIZED, "invalid_token", self.to_string())
            }
            AppError::TokenExpired => {
                (StatusCode::UNAUTHORIZED, "token_expired", self.to_string())
            }
            AppError::PermissionDenied => {
                (StatusCode::FORBIDDEN, "permission_denied", self.to_string())
            }
            AppError::EmployeeNotFound => (
                StatusCode::NOT_FOUND,
                "employee_not_found",
                self.to_string(),
            ),
            AppError::CardNotFound => {
                (StatusCode::NOT_FOUND, "card_not_found", self.to_string())
            }
            AppError::DuplicateEmployee => (
                StatusCode::BAD_REQUEST,
                "duplicate_employee",
                self.to_string(),
            ),
            AppError::DuplicateCard => {
                (StatusCode::BAD_REQUEST, "duplicate_card", self.to_string())
            }
            AppError::DuplicateBranch => {
                (StatusCode::BAD_REQUEST, "duplicate_branch", self.to_string())
            }
            AppError::InsufficientBalance => (
                StatusCode::BAD_REQUEST,
                "insufficient_balance",
                self.to_string(),
            ),
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::Database(ref err) => {
                // Log the real cause server-side; clients get a generic message
                tracing::error!("Database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::PasswordHash => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "An internal error occurred".to_string(),
            ),
        };

        // Build JSON response body
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        // Return the response with status code and JSON body
        (status, body).into_response()
    }
}
