//! Card data models and API request/response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a payment card record from the database.
///
/// # Database Table
///
/// Maps to the `cards` table. The card number is caller-assigned and unique.
///
/// # Balance Storage
///
/// Balances are stored as `i64` cents to avoid floating-point precision
/// issues: $10.50 is stored as 1050 cents. A CHECK constraint keeps the
/// column non-negative, and the only writers are the withdrawal/deposit
/// services, which never commit a negative balance.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Card {
    /// Caller-assigned unique card number
    pub card_number: String,

    /// Display name of the card holder
    pub holder_name: String,

    /// Current balance in cents (not dollars)
    pub balance_cents: i64,

    /// Timestamp when the card was issued
    pub created_at: DateTime<Utc>,
}

/// Request body for issuing a new card.
///
/// # JSON Example
///
/// ```json
/// {
///   "card_number": "4000-1234-5678-9010",
///   "holder_name": "Dana Osei",
///   "initial_balance_cents": 10000
/// }
/// ```
///
/// # Validation
///
/// - `card_number`, `holder_name`: required, non-empty
/// - `initial_balance_cents`: optional, defaults to 0, must be >= 0
#[derive(Debug, Deserialize)]
pub struct CreateCardRequest {
    pub card_number: String,

    pub holder_name: String,

    /// Opening balance in cents (defaults to 0 if not provided)
    #[serde(default)]
    pub initial_balance_cents: i64,
}
