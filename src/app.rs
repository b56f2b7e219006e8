//! HTTP router assembly.
//!
//! One place builds the whole route table so the binary and the
//! integration tests serve exactly the same application.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers, middleware, state::AppState};

/// Build the application router.
///
/// # Route Groups
///
/// - Public: health check, employee registration, login
/// - Authenticated: everything under a valid bearer token; the auth
///   middleware verifies the token and injects the session claims
///
/// Permission checks beyond "has a valid session" (e.g. `processWithdrawal`)
/// live in the services, next to the operation they gate.
pub fn build_router(state: AppState) -> Router {
    // Authenticated routes (require a valid session token)
    let authenticated_routes = Router::new()
        // Card management routes
        .route("/api/cards", post(handlers::cards::create_card))
        .route("/api/cards", get(handlers::cards::list_cards))
        .route("/api/cards/{number}", get(handlers::cards::get_card))
        .route(
            "/api/cards/{number}/transactions",
            get(handlers::cards::list_card_transactions),
        )
        // Balance mutation routes
        .route("/api/withdraw", post(handlers::withdrawals::withdraw))
        .route("/api/deposit", post(handlers::withdrawals::deposit))
        // Employee lookup
        .route(
            "/api/employees/{id}",
            get(handlers::employees::get_employee),
        )
        // Branch registry
        .route("/api/branches", post(handlers::branches::create_branch))
        .route("/api/branches", get(handlers::branches::list_branches))
        // Apply authentication middleware to all routes in this group
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::auth_middleware,
        ));

    // Combine authenticated routes with public routes
    Router::new()
        // Public routes (no authentication required)
        .route("/health", get(handlers::health::health_check))
        .route("/api/register", post(handlers::auth::register))
        .route("/api/login", post(handlers::auth::login))
        // Merge authenticated routes
        .merge(authenticated_routes)
        // Add distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        // The dashboard pages are served separately, so allow cross-origin calls
        .layer(CorsLayer::permissive())
        // Share pool + config with all handlers via State extraction
        .with_state(state)
}
