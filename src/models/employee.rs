//! Employee data models and API request/response types.
//!
//! This module defines:
//! - `Employee`: Database entity representing a branch employee
//! - `RegisterRequest` / `LoginRequest`: Request bodies for the public endpoints
//! - `EmployeeResponse`: Response body returned to clients (credential-free)
//! - `LoginResponse`: Token payload returned on successful login

use serde::{Deserialize, Serialize};
use sqlx::types::Json;

/// Permission token required to process withdrawals.
///
/// Granted to every employee at registration. Permission sets are stored as
/// a JSON array so new tokens can be introduced without schema changes.
pub const PROCESS_WITHDRAWAL: &str = "processWithdrawal";

/// Represents an employee record from the database.
///
/// # Database Table
///
/// Maps to the `employees` table. The identifier and the email are both
/// caller-assigned and globally unique (enforced by the schema).
///
/// The password is present only as an argon2 hash. This struct is never
/// serialized directly; responses go through [`EmployeeResponse`], which
/// has no credential field at all.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Employee {
    /// Caller-assigned unique identifier, e.g. a staff number
    pub employee_id: String,

    /// Display name
    pub name: String,

    /// Unique email address, used as the login name
    pub email: String,

    /// argon2 PHC-format hash of the password
    pub password_hash: String,

    /// Permission tokens held by this employee, stored as a JSON array
    pub permissions: Json<Vec<String>>,
}

/// Request body for registering a new employee.
///
/// # JSON Example
///
/// ```json
/// {
///   "employee_id": "emp-104",
///   "name": "Dana Osei",
///   "email": "dana.osei@example.com",
///   "password": "hunter2hunter2"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for logging in.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response body for employee endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "employee_id": "emp-104",
///   "name": "Dana Osei",
///   "email": "dana.osei@example.com",
///   "permissions": ["processWithdrawal"]
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct EmployeeResponse {
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub permissions: Vec<String>,
}

/// Convert database Employee to API EmployeeResponse.
///
/// This transformation drops the password hash.
impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            employee_id: employee.employee_id,
            name: employee.name,
            email: employee.email,
            permissions: employee.permissions.0,
        }
    }
}

/// Response body for a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Signed session token, valid for the configured TTL
    pub token: String,

    pub employee_id: String,

    pub name: String,
}
