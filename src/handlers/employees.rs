//! Employee lookup HTTP handlers.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    error::AppError, models::employee::EmployeeResponse, services::auth_service, state::AppState,
};

/// Get an employee by identifier.
///
/// # Endpoint
///
/// `GET /api/employees/:id`
///
/// # Response
///
/// - **Success (200 OK)**: Employee details; the password hash is never
///   part of the response type
/// - **Error (404)**: No employee with that identifier
/// - **Error (401)**: Invalid session token
pub async fn get_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let employee = auth_service::find_by_employee_id(&state.pool, &employee_id)
        .await?
        .ok_or(AppError::EmployeeNotFound)?;

    Ok(Json(employee.into()))
}
