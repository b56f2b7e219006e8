//! Withdrawal and deposit HTTP handlers.
//!
//! Thin wrappers: both endpoints unpack the session claims and the JSON
//! body, then delegate to the withdrawal service, which owns the
//! permission gate and the atomic debit-and-log unit.

use axum::{Extension, Json, extract::State};

use crate::{
    error::AppError,
    models::transaction::{DepositRequest, TransactionReceipt, WithdrawRequest},
    services::{token::Claims, withdrawal_service},
    state::AppState,
};

/// Withdraw from a card.
///
/// # Endpoint
///
/// `POST /api/withdraw`
///
/// # Request Body
///
/// ```json
/// {
///   "card_number": "4000-1234-5678-9010",
///   "amount_cents": 4000,
///   "branch_id": "BR-021"
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: `{"new_balance_cents": 6000, "transaction_id": "..."}`
/// - **Error (400)**: Non-positive amount, or insufficient balance
/// - **Error (401)**: Invalid session token
/// - **Error (403)**: Session lacks the `processWithdrawal` permission
/// - **Error (404)**: Card not found
pub async fn withdraw(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<WithdrawRequest>,
) -> Result<Json<TransactionReceipt>, AppError> {
    let receipt = withdrawal_service::withdraw(
        &state.pool,
        &claims,
        &request.card_number,
        request.amount_cents,
        &request.branch_id,
    )
    .await?;

    Ok(Json(receipt))
}

/// Deposit onto a card.
///
/// # Endpoint
///
/// `POST /api/deposit`
///
/// Same request/response shape as withdraw. Requires a valid session but
/// no extra permission token.
pub async fn deposit(
    State(state): State<AppState>,
    Json(request): Json<DepositRequest>,
) -> Result<Json<TransactionReceipt>, AppError> {
    let receipt = withdrawal_service::deposit(
        &state.pool,
        &request.card_number,
        request.amount_cents,
        &request.branch_id,
    )
    .await?;

    Ok(Json(receipt))
}
