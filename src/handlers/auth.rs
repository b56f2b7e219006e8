//! Registration and login HTTP handlers.
//!
//! These are the only business routes outside the authentication
//! middleware: registering creates the credentials a session is built
//! from, and login trades credentials for a signed session token.

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    error::AppError,
    models::employee::{EmployeeResponse, LoginRequest, LoginResponse, RegisterRequest},
    services::auth_service,
    state::AppState,
};

/// Register a new employee.
///
/// # Endpoint
///
/// `POST /api/register`
///
/// # Request Body
///
/// ```json
/// {
///   "employee_id": "emp-104",
///   "name": "Dana Osei",
///   "email": "dana.osei@example.com",
///   "password": "hunter2hunter2"
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: Employee summary; the new employee holds
///   the default `processWithdrawal` permission
/// - **Error (400)**: Missing fields, or employee_id/email already taken
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<EmployeeResponse>), AppError> {
    let employee = auth_service::register(&state.pool, request).await?;

    Ok((StatusCode::CREATED, Json(employee)))
}

/// Log in and receive a session token.
///
/// # Endpoint
///
/// `POST /api/login`
///
/// # Response
///
/// - **Success (200 OK)**:
///
/// ```json
/// {
///   "token": "7b22656d...5d7d.9f2c41...",
///   "employee_id": "emp-104",
///   "name": "Dana Osei"
/// }
/// ```
///
/// - **Error (401)**: Unknown email or wrong password; the two cases are
///   deliberately indistinguishable
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = auth_service::login(&state.pool, &state.config, request).await?;

    Ok(Json(response))
}
