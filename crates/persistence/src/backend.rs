// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite`-specific connection setup.
//!
//! This module is limited to:
//! - Connection initialization
//! - Migration execution
//! - `SQLite`-specific configuration (PRAGMA statements)
//!
//! All booking queries and mutations live in `queries/` and `mutations/`
//! and use the Diesel DSL.

use diesel::prelude::*;
use diesel::sql_types::Integer;
use diesel::{Connection, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use crate::error::PersistenceError;

/// Embedded `SQLite` migrations, applied at connection setup.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Helper row struct for PRAGMA queries.
///
/// Raw SQL is justified here as Diesel has no PRAGMA DSL.
#[derive(QueryableByName)]
struct PragmaRow {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

/// Verifies that foreign key enforcement is enabled.
///
/// Reservations and blocks reference camps; without enforcement the
/// database cannot guarantee referential integrity.
///
/// # Errors
///
/// Returns an error if foreign key enforcement is not enabled.
pub fn verify_foreign_key_enforcement(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    // NOTE: PRAGMA is raw SQL (justified - Diesel has no PRAGMA DSL)
    let foreign_keys_enabled: i32 = diesel::sql_query("PRAGMA foreign_keys")
        .get_result::<PragmaRow>(conn)?
        .foreign_keys;

    if foreign_keys_enabled == 0 {
        return Err(PersistenceError::ForeignKeyEnforcementNotEnabled);
    }

    info!("SQLite foreign key enforcement is enabled");
    Ok(())
}

/// Run pending migrations on the provided connection.
///
/// # Errors
///
/// Returns an error if migration execution fails.
pub fn run_migrations(
    conn: &mut SqliteConnection,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!("Running SQLite database migrations");
    conn.run_pending_migrations(MIGRATIONS)?;
    Ok(())
}

/// Initialize a `SQLite` database at the given URL and run migrations.
///
/// # Arguments
///
/// * `database_url` - The `SQLite` database URL (shared-memory URL or file
///   path)
///
/// # Errors
///
/// Returns an error if connection or migration fails.
pub fn initialize_database(database_url: &str) -> Result<SqliteConnection, PersistenceError> {
    info!("Initializing SQLite database at: {}", database_url);

    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)
        .map_err(|e| PersistenceError::DatabaseConnectionFailed(e.to_string()))?;

    // NOTE: PRAGMA is raw SQL (justified - Diesel has no PRAGMA DSL)
    diesel::sql_query("PRAGMA foreign_keys = ON")
        .execute(&mut conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;

    // A writer that finds the database locked waits for the lock rather
    // than failing immediately, so a losing concurrent insert reaches the
    // overlap re-check and reports OverlapConflict instead of a raw busy
    // error.
    diesel::sql_query("PRAGMA busy_timeout = 5000")
        .execute(&mut conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;

    run_migrations(&mut conn).map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;

    Ok(conn)
}

/// Enable WAL mode for file-based `SQLite` databases.
///
/// WAL (Write-Ahead Logging) mode provides better read concurrency
/// for file-based databases.
///
/// # Errors
///
/// Returns an error if the PRAGMA statement fails.
pub fn enable_wal_mode(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    // NOTE: PRAGMA is raw SQL (justified - Diesel has no PRAGMA DSL)
    diesel::sql_query("PRAGMA journal_mode = WAL")
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;
    Ok(())
}
