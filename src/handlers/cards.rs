//! Card management HTTP handlers.
//!
//! This module implements the card-related API endpoints:
//! - POST /api/cards - Issue a new card
//! - GET /api/cards - List all cards
//! - GET /api/cards/:number - Get card by number
//! - GET /api/cards/:number/transactions - Card's transaction history
//!
//! Cards are plain reads and a constrained insert, so the queries live
//! here; balance mutations go through the withdrawal service.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    error::{AppError, is_unique_violation},
    models::card::{Card, CreateCardRequest},
    models::transaction::Transaction,
    state::AppState,
};

/// Issue a new card.
///
/// # Endpoint
///
/// `POST /api/cards`
///
/// # Request Body
///
/// ```json
/// {
///   "card_number": "4000-1234-5678-9010",
///   "holder_name": "Dana Osei",
///   "initial_balance_cents": 10000
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: Returns the created card
/// - **Error (400)**: Duplicate card number, or negative opening balance
/// - **Error (401)**: Invalid session token
///
/// Duplicate detection is the card_number PRIMARY KEY constraint, so two
/// concurrent creations of the same number cannot both succeed.
pub async fn create_card(
    State(state): State<AppState>,
    Json(request): Json<CreateCardRequest>,
) -> Result<(StatusCode, Json<Card>), AppError> {
    if request.card_number.trim().is_empty() || request.holder_name.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "card_number and holder_name are required".to_string(),
        ));
    }
    if request.initial_balance_cents < 0 {
        return Err(AppError::InvalidRequest(
            "initial_balance_cents must not be negative".to_string(),
        ));
    }

    let card = sqlx::query_as::<_, Card>(
        r#"
        INSERT INTO cards (card_number, holder_name, balance_cents, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING card_number, holder_name, balance_cents, created_at
        "#,
    )
    .bind(&request.card_number)
    .bind(&request.holder_name)
    .bind(request.initial_balance_cents)
    .bind(chrono::Utc::now())
    .fetch_one(&state.pool)
    .await
    .map_err(|err| {
        if is_unique_violation(&err) {
            AppError::DuplicateCard
        } else {
            AppError::Database(err)
        }
    })?;

    Ok((StatusCode::CREATED, Json(card)))
}

/// List all cards, newest first.
///
/// # Endpoint
///
/// `GET /api/cards`
///
/// # Response
///
/// - **Success (200 OK)**: Array of cards (may be empty), a snapshot at
///   call time
/// - **Error (401)**: Invalid session token
pub async fn list_cards(State(state): State<AppState>) -> Result<Json<Vec<Card>>, AppError> {
    let cards = sqlx::query_as::<_, Card>(
        "SELECT card_number, holder_name, balance_cents, created_at
         FROM cards
         ORDER BY created_at DESC",
    )
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(cards))
}

/// Get a specific card by number.
///
/// # Endpoint
///
/// `GET /api/cards/:number`
///
/// # Response
///
/// - **Success (200 OK)**: Card details
/// - **Error (404)**: No card with that number
/// - **Error (401)**: Invalid session token
pub async fn get_card(
    State(state): State<AppState>,
    Path(card_number): Path<String>,
) -> Result<Json<Card>, AppError> {
    let card = sqlx::query_as::<_, Card>(
        "SELECT card_number, holder_name, balance_cents, created_at
         FROM cards
         WHERE card_number = ?",
    )
    .bind(&card_number)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::CardNotFound)?;

    Ok(Json(card))
}

/// List a card's transactions, newest first.
///
/// # Endpoint
///
/// `GET /api/cards/:number/transactions`
///
/// # Response
///
/// - **Success (200 OK)**: The card's withdrawal/deposit history
/// - **Error (404)**: No card with that number
/// - **Error (401)**: Invalid session token
pub async fn list_card_transactions(
    State(state): State<AppState>,
    Path(card_number): Path<String>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    // 404 for an unknown card rather than an empty history
    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM cards WHERE card_number = ?)")
            .bind(&card_number)
            .fetch_one(&state.pool)
            .await?;

    if !exists {
        return Err(AppError::CardNotFound);
    }

    let transactions = sqlx::query_as::<_, Transaction>(
        "SELECT id, card_number, amount_cents, branch_id, transaction_type, created_at
         FROM transactions
         WHERE card_number = ?
         ORDER BY created_at DESC",
    )
    .bind(&card_number)
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(transactions))
}
