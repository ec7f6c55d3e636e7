//! Database connection utilities.

use crate::DatabaseResult;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use metalfactor_error::{DatabaseError, DatabaseErrorKind};
use std::path::Path;
use tracing::{debug, info, instrument};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Database file used when none is configured.
pub const DEFAULT_DATABASE_PATH: &str = "campaigns.db";

const IN_MEMORY: &str = ":memory:";

/// Open the SQLite database at `path`, creating the file if it is missing.
///
/// `":memory:"` opens a private in-memory database.
///
/// # Errors
///
/// Returns an error if the path is not valid UTF-8 or SQLite cannot open it.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn establish_connection(path: impl AsRef<Path>) -> DatabaseResult<SqliteConnection> {
    let path = path.as_ref();
    let url = path.to_str().ok_or_else(|| {
        DatabaseError::new(DatabaseErrorKind::Connection(format!(
            "Database path is not valid UTF-8: {}",
            path.display()
        )))
    })?;

    let existed = url == IN_MEMORY || path.is_file();
    let conn = SqliteConnection::establish(url)?;

    if existed {
        debug!("Opened database");
    } else {
        info!("Database created");
    }

    Ok(conn)
}

/// Run pending migrations.
///
/// The campaigns table is created with `IF NOT EXISTS`, so databases written
/// before migrations were tracked are adopted as-is.
pub fn run_migrations(conn: &mut SqliteConnection) -> DatabaseResult<()> {
    conn.run_pending_migrations(MIGRATIONS)
        .map(|applied| debug!(count = applied.len(), "Applied migrations"))
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Migration(e.to_string())))
}

/// Open the database and bring its schema up to date.
pub fn open_database(path: impl AsRef<Path>) -> DatabaseResult<SqliteConnection> {
    let mut conn = establish_connection(path)?;
    run_migrations(&mut conn)?;
    Ok(conn)
}
