//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! They handle database transactions, validation, and complex operations.

pub mod auth_service;
pub mod token;
pub mod withdrawal_service;
