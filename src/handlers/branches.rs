//! Branch registry HTTP handlers.

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    error::{AppError, is_unique_violation},
    models::branch::{Branch, CreateBranchRequest},
    state::AppState,
};

/// Register a bank branch.
///
/// # Endpoint
///
/// `POST /api/branches`
///
/// # Response
///
/// - **Success (201 Created)**: Returns the created branch
/// - **Error (400)**: Duplicate branch_id or missing fields
/// - **Error (401)**: Invalid session token
pub async fn create_branch(
    State(state): State<AppState>,
    Json(request): Json<CreateBranchRequest>,
) -> Result<(StatusCode, Json<Branch>), AppError> {
    if request.branch_id.trim().is_empty()
        || request.branch_name.trim().is_empty()
        || request.location.trim().is_empty()
    {
        return Err(AppError::InvalidRequest(
            "branch_id, branch_name and location are required".to_string(),
        ));
    }

    let branch = sqlx::query_as::<_, Branch>(
        r#"
        INSERT INTO branches (branch_id, branch_name, location)
        VALUES (?, ?, ?)
        RETURNING branch_id, branch_name, location
        "#,
    )
    .bind(&request.branch_id)
    .bind(&request.branch_name)
    .bind(&request.location)
    .fetch_one(&state.pool)
    .await
    .map_err(|err| {
        if is_unique_violation(&err) {
            AppError::DuplicateBranch
        } else {
            AppError::Database(err)
        }
    })?;

    Ok((StatusCode::CREATED, Json(branch)))
}

/// List all registered branches.
///
/// # Endpoint
///
/// `GET /api/branches`
pub async fn list_branches(State(state): State<AppState>) -> Result<Json<Vec<Branch>>, AppError> {
    let branches = sqlx::query_as::<_, Branch>(
        "SELECT branch_id, branch_name, location FROM branches ORDER BY branch_id",
    )
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(branches))
}
