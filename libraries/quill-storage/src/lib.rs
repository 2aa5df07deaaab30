//! Quill Storage
//!
//! `SQLite` persistence for Quill accounts and notes.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: `users` and `notes` each own their queries
//! - **Owner Scoping**: every note query filters on the owning user
//! - **Trait Facade**: `SqliteStorage` implements `IdentityStore` and `NoteStore`
//!
//! # Example
//!
//! ```rust,no_run
//! use quill_core::{NoteStore, UserId};
//! use quill_storage::{create_pool, run_migrations, SqliteStorage};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://quill.db").await?;
//! run_migrations(&pool).await?;
//!
//! let storage = SqliteStorage::new(pool);
//! let notes = storage.list_notes(&UserId::new("some-user")).await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
mod timestamps;

// Vertical slices
pub mod notes;
pub mod users;

pub use context::SqliteStorage;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://quill.db>`)
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!("Creating pool with URL: {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::debug!("Pool created");

    Ok(pool)
}
