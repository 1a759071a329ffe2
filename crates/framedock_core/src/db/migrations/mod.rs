//! SQLite migration registry and executor.
//!
//! # Responsibility
//! - Register schema migrations in strictly increasing version order.
//! - Apply pending migrations, each in its own transaction.
//!
//! # Invariants
//! - The stored version never advances past the last migration that
//!   committed successfully.
//! - The `schema_version` table holds exactly one row (id = 1).
//! - Migration SQL is idempotent (`IF NOT EXISTS` creation), so a
//!   repaired database can be re-migrated safely.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::{Connection, Transaction};

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("0001_init.sql"),
}];

/// Returns the latest migration version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Applies all pending migrations on the provided connection.
///
/// A failed migration aborts the sequence: later migrations do not run
/// and the stored version stays at the last committed one.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    ensure_version_table(conn)?;

    let current_version = current_version(conn)?;
    let latest = latest_version();

    if current_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current_version,
            latest_supported: latest,
        });
    }

    for migration in MIGRATIONS {
        if migration.version <= current_version {
            continue;
        }

        let tx = conn.transaction()?;
        tx.execute_batch(migration.sql)
            .map_err(|source| DbError::MigrationFailed {
                version: migration.version,
                source,
            })?;
        record_version(&tx, migration.version)?;
        tx.commit()?;

        info!(
            "event=migration_applied module=db status=ok version={}",
            migration.version
        );
    }

    Ok(())
}

/// Creates the version-tracking table. Safe to run on every open.
fn ensure_version_table(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            version INTEGER NOT NULL,
            updated_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        );",
    )?;
    Ok(())
}

/// Reads the stored schema version. A missing row means a fresh database.
fn current_version(conn: &Connection) -> DbResult<u32> {
    let mut stmt = conn.prepare("SELECT version FROM schema_version WHERE id = 1;")?;
    let mut rows = stmt.query([])?;
    if let Some(row) = rows.next()? {
        return Ok(row.get(0)?);
    }
    Ok(0)
}

fn record_version(tx: &Transaction<'_>, version: u32) -> DbResult<()> {
    tx.execute(
        "INSERT INTO schema_version (id, version)
         VALUES (1, ?1)
         ON CONFLICT(id) DO UPDATE SET
            version = excluded.version,
            updated_at = strftime('%s', 'now');",
        [version],
    )?;
    Ok(())
}
