//! Database connection pool and migration management.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

/// Type alias for the SQLite connection pool.
///
/// Instead of writing `Pool<Sqlite>` everywhere, we can use `DbPool`.
pub type DbPool = Pool<Sqlite>;

/// Create a new SQLite connection pool.
///
/// The database file is created if it does not exist. WAL journaling plus a
/// busy timeout let concurrent write transactions queue on the database
/// lock instead of failing immediately, which the withdrawal path relies on
/// when two requests hit the same card at once.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string, e.g. `sqlite://card-ledger.db`
///
/// # Errors
///
/// Returns an error if the connection string is invalid or the database
/// file cannot be opened.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        // Limit concurrent connections
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Run database migrations from the `migrations/` directory.
///
/// Migrations are tracked in a special `_sqlx_migrations` table, so each
/// migration runs only once.
///
/// # Errors
///
/// Returns an error if a migration file contains invalid SQL or the
/// database rejects it.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    // The macro reads migrations at compile time from ./migrations directory
    sqlx::migrate!("./migrations").run(pool).await
}
