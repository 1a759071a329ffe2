//! Settings repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist key-value preferences with first-write/last-write timestamps.
//!
//! # Invariants
//! - `set` is a single atomic upsert; there is no read-then-write window.
//! - `created_at` is fixed at first write; only `updated_at` moves.
//! - No delete operation is exposed.

use crate::model::setting::Setting;
use crate::repo::RepoResult;
use rusqlite::{params, Connection};

/// Repository interface for preference storage.
pub trait SettingsRepository {
    /// Returns the stored value for `key`. An unknown key is `Ok(None)`.
    fn get(&self, key: &str) -> RepoResult<Option<String>>;
    /// Inserts or updates one preference atomically.
    fn set(&self, key: &str, value: &str) -> RepoResult<()>;
    /// Returns every stored preference in storage order.
    fn list_all(&self) -> RepoResult<Vec<Setting>>;
}

/// SQLite-backed settings repository.
pub struct SqliteSettingsRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSettingsRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SettingsRepository for SqliteSettingsRepository<'_> {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM settings WHERE key = ?1;")?;
        let mut rows = stmt.query([key])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get(0)?));
        }
        Ok(None)
    }

    fn set(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO settings (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = strftime('%s', 'now');",
            params![key, value],
        )?;
        Ok(())
    }

    fn list_all(&self) -> RepoResult<Vec<Setting>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key, value, created_at, updated_at FROM settings;")?;
        let mut rows = stmt.query([])?;
        let mut settings = Vec::new();
        while let Some(row) = rows.next()? {
            settings.push(Setting {
                key: row.get("key")?,
                value: row.get("value")?,
                created_at: row.get("created_at")?,
                updated_at: row.get("updated_at")?,
            });
        }
        Ok(settings)
    }
}
