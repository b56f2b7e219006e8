//! Shared router state.

use std::sync::Arc;

use crate::{config::Config, db::DbPool};

/// State handed to every handler and middleware by Axum.
///
/// Cloning is cheap: the pool is internally reference-counted and the
/// config sits behind an `Arc`. The config is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(pool: DbPool, config: Config) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }
}
