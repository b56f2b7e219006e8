//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Performs business logic (database queries, validation)
//! 3. Returns HTTP response (JSON, status code)

/// Registration and login endpoints
pub mod auth;
/// Branch registry endpoints
pub mod branches;
/// Card management endpoints
pub mod cards;
/// Employee lookup endpoints
pub mod employees;
/// Health check endpoint
pub mod health;
/// Withdrawal and deposit endpoints
pub mod withdrawals;
