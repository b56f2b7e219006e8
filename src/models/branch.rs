//! Branch registry models.
//!
//! Branches are reference data for the back office. Withdrawals carry a
//! free-form `branch_id` and do not validate it against this registry.

use serde::{Deserialize, Serialize};

/// Represents a bank branch record from the database.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Branch {
    /// Caller-assigned unique branch identifier
    pub branch_id: String,

    /// Display name, e.g. "Main Street"
    pub branch_name: String,

    /// Human-readable location
    pub location: String,
}

/// Request body for registering a branch.
#[derive(Debug, Deserialize)]
pub struct CreateBranchRequest {
    pub branch_id: String,
    pub branch_name: String,
    pub location: String,
}
