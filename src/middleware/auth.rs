//! Session token authentication middleware.
//!
//! This middleware intercepts every protected request to:
//! 1. Extract the bearer token from the Authorization header
//! 2. Verify its signature and expiry against the configured secret
//! 3. Inject the verified claims into the request
//! 4. Reject unauthorized requests with HTTP 401
//!
//! Verification is purely cryptographic; no database round trip. The
//! claims carry the employee's identifier and permission set, so handlers
//! and services gate on permissions without another lookup.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, services::token, state::AppState};

/// Session authentication middleware function.
///
/// # Headers
///
/// Expected header format:
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Returns
///
/// - `Ok(Response)` if the token verifies (calls next handler with
///   [`token::Claims`] available as a request extension)
/// - `Err(AppError::InvalidToken)` for a missing/malformed/forged token
/// - `Err(AppError::TokenExpired)` for a correctly signed but stale token
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Step 1: Extract Authorization header
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::InvalidToken)?;

    // Step 2: Extract bearer token
    // Expected format: "Bearer <token>"
    let bearer = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AppError::InvalidToken)?;

    // Step 3: Verify signature and expiry
    let claims = token::verify(&state.config.token_secret, bearer)?;

    // Step 4: Inject claims into request extensions
    // Route handlers can now extract this using Extension<Claims>
    request.extensions_mut().insert(claims);

    // Step 5: Call the next middleware/handler
    Ok(next.run(request).await)
}
