//! Transaction data models and API request/response types.
//!
//! This module defines:
//! - `Transaction`: Database entity, one row per committed balance mutation
//! - `WithdrawRequest` / `DepositRequest`: Request bodies
//! - `TransactionReceipt`: Response body for withdraw/deposit operations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Transaction type tag for withdrawals.
pub const TYPE_WITHDRAWAL: &str = "withdrawal";
/// Transaction type tag for deposits.
pub const TYPE_DEPOSIT: &str = "deposit";

/// Represents a transaction record from the database.
///
/// # Database Table
///
/// Maps to the `transactions` table, which is append-only: rows are written
/// exactly once, in the same database transaction as the balance mutation
/// they record, and never updated or deleted afterwards.
///
/// The card is referenced by number rather than owned; history for a card
/// is looked up with `WHERE card_number = ?`.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Transaction {
    /// System-generated UUID
    pub id: String,

    /// Number of the card whose balance was mutated
    pub card_number: String,

    /// Amount in cents, always positive; the type tag carries the direction
    pub amount_cents: i64,

    /// Branch where the operation was performed (free-form identifier)
    pub branch_id: String,

    /// Either "withdrawal" or "deposit"
    pub transaction_type: String,

    /// When the transaction was committed
    pub created_at: DateTime<Utc>,
}

/// Request to withdraw from a card.
///
/// # JSON Example
///
/// ```json
/// {
///   "card_number": "4000-1234-5678-9010",
///   "amount_cents": 4000,
///   "branch_id": "BR-021"
/// }
/// ```
///
/// # Validation
///
/// - Caller must hold the `processWithdrawal` permission
/// - Card must have sufficient balance
/// - Amount must be positive
#[derive(Debug, Deserialize)]
pub struct WithdrawRequest {
    pub card_number: String,
    pub amount_cents: i64,
    pub branch_id: String,
}

/// Request to deposit onto a card. Same shape as a withdrawal.
#[derive(Debug, Deserialize)]
pub struct DepositRequest {
    pub card_number: String,
    pub amount_cents: i64,
    pub branch_id: String,
}

/// Response returned for withdraw/deposit operations.
///
/// # JSON Example
///
/// ```json
/// {
///   "new_balance_cents": 6000,
///   "transaction_id": "770e8400-e29b-41d4-a716-446655440002"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct TransactionReceipt {
    /// Card balance after the mutation committed
    pub new_balance_cents: i64,

    /// Identifier of the freshly appended transaction record
    pub transaction_id: String,
}
