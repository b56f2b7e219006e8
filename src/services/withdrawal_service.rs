//! Withdrawal service - balance mutations against cards.
//!
//! This service owns every write to `cards.balance_cents`. Each mutation
//! and its transaction-log row are committed in one database transaction,
//! so a committed debit always has a retrievable record and a failed log
//! append rolls the debit back.
//!
//! # Concurrency
//!
//! The debit is a single conditional UPDATE that both checks sufficiency
//! and subtracts: `SET balance_cents = balance_cents - ? WHERE ... AND
//! balance_cents >= ?`. Two concurrent withdrawals against the same card
//! therefore cannot both pass the check against a stale balance; the
//! second either re-evaluates against the committed balance or matches no
//! row. The balance can never go negative.

use chrono::Utc;
use uuid::Uuid;

use crate::{
    db::DbPool,
    error::AppError,
    models::employee::PROCESS_WITHDRAWAL,
    models::transaction::{TYPE_DEPOSIT, TYPE_WITHDRAWAL, TransactionReceipt},
    services::token::Claims,
};

/// Process a withdrawal against a card.
///
/// # Process
///
/// 1. Reject unless the caller's session carries `processWithdrawal`
/// 2. Validate amount and branch
/// 3. In one database transaction: conditionally debit the balance, then
///    append the transaction record
/// 4. Return the post-debit balance and the new transaction id
///
/// # Errors
///
/// - `PermissionDenied`: session lacks `processWithdrawal`
/// - `InvalidRequest`: non-positive amount or empty branch
/// - `CardNotFound`: no such card
/// - `InsufficientBalance`: balance lower than the amount; balance unchanged
/// - `Database`: unexpected failure; any partial work is rolled back
pub async fn withdraw(
    pool: &DbPool,
    claims: &Claims,
    card_number: &str,
    amount_cents: i64,
    branch_id: &str,
) -> Result<TransactionReceipt, AppError> {
    if !claims.has_permission(PROCESS_WITHDRAWAL) {
        return Err(AppError::PermissionDenied);
    }

    validate_amount(amount_cents, branch_id)?;

    let mut tx = pool.begin().await?;

    // Sufficiency check and debit in one statement; matches no row when the
    // card is missing or the balance is too low
    let new_balance: Option<i64> = sqlx::query_scalar(
        r#"
        UPDATE cards
        SET balance_cents = balance_cents - ?
        WHERE card_number = ? AND balance_cents >= ?
        RETURNING balance_cents
        "#,
    )
    .bind(amount_cents)
    .bind(card_number)
    .bind(amount_cents)
    .fetch_optional(&mut *tx)
    .await?;

    let new_balance = match new_balance {
        Some(balance) => balance,
        None => {
            // Distinguish a missing card from an underfunded one
            let exists: bool =
                sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM cards WHERE card_number = ?)")
                    .bind(card_number)
                    .fetch_one(&mut *tx)
                    .await?;

            tx.rollback().await?;
            return Err(if exists {
                AppError::InsufficientBalance
            } else {
                AppError::CardNotFound
            });
        }
    };

    let transaction_id = append_transaction(&mut tx, card_number, amount_cents, branch_id, TYPE_WITHDRAWAL).await?;

    // Commit debit and log together
    tx.commit().await?;

    Ok(TransactionReceipt {
        new_balance_cents: new_balance,
        transaction_id,
    })
}

/// Process a deposit onto a card.
///
/// Same shape as [`withdraw`] without the sufficiency check or the
/// permission gate: any authenticated employee may take a deposit.
pub async fn deposit(
    pool: &DbPool,
    card_number: &str,
    amount_cents: i64,
    branch_id: &str,
) -> Result<TransactionReceipt, AppError> {
    validate_amount(amount_cents, branch_id)?;

    let mut tx = pool.begin().await?;

    let new_balance: Option<i64> = sqlx::query_scalar(
        r#"
        UPDATE cards
        SET balance_cents = balance_cents + ?
        WHERE card_number = ?
        RETURNING balance_cents
        "#,
    )
    .bind(amount_cents)
    .bind(card_number)
    .fetch_optional(&mut *tx)
    .await?;

    let new_balance = match new_balance {
        Some(balance) => balance,
        None => {
            tx.rollback().await?;
            return Err(AppError::CardNotFound);
        }
    };

    let transaction_id = append_transaction(&mut tx, card_number, amount_cents, branch_id, TYPE_DEPOSIT).await?;

    tx.commit().await?;

    Ok(TransactionReceipt {
        new_balance_cents: new_balance,
        transaction_id,
    })
}

fn validate_amount(amount_cents: i64, branch_id: &str) -> Result<(), AppError> {
    if amount_cents <= 0 {
        return Err(AppError::InvalidRequest(
            "Amount must be positive".to_string(),
        ));
    }
    if branch_id.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "branch_id is required".to_string(),
        ));
    }
    Ok(())
}

/// Append one row to the transaction log inside the caller's transaction.
async fn append_transaction(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    card_number: &str,
    amount_cents: i64,
    branch_id: &str,
    transaction_type: &str,
) -> Result<String, AppError> {
    let transaction_id = Uuid::new_v4().to_string();

    sqlx::query(
        r#"
        INSERT INTO transactions (id, card_number, amount_cents, branch_id, transaction_type, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&transaction_id)
    .bind(card_number)
    .bind(amount_cents)
    .bind(branch_id)
    .bind(transaction_type)
    .bind(Utc::now())
    .execute(&mut **tx)
    .await?;

    Ok(transaction_id)
}
