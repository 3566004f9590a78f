//! Local SQLite job store for coldvault.
//!
//! One table, `jobs`, tracks every asynchronous Glacier job this tool has
//! initiated. The pool is constructed once at startup and passed into each
//! repository call; there is no ambient connection state.

use std::path::Path;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Embedded schema migrations, applied by the `init` action.
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Open (creating if necessary) the SQLite database at `path`.
///
/// The parent directory is created when missing. The pool is capped at a
/// single connection: the tool is strictly sequential and SQLite gains
/// nothing from more.
pub async fn connect(path: &Path) -> Result<DbPool, sqlx::Error> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir).map_err(sqlx::Error::Io)?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    tracing::debug!(path = %path.display(), "Opening job store");

    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
}
