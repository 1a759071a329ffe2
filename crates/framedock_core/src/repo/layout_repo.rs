//! Layout repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist named layout snapshots keyed by surrogate id.
//! - Own the activation toggle with atomic semantics.
//!
//! # Invariants
//! - Saves are keyed by `name`; the surrogate id never changes across
//!   re-saves of the same name.
//! - At most one row has `is_active = 1`; `set_active` enforces this in
//!   a single immediate transaction.
//! - `list_all` ordering (`updated_at DESC`) is a caller-visible
//!   contract, not incidental.

use crate::model::layout::{Layout, LayoutId};
use crate::repo::{int_to_bool, RepoError, RepoResult};
use rusqlite::{params, Connection, Row, TransactionBehavior};

const LAYOUT_SELECT_SQL: &str = "SELECT
    id,
    name,
    layout_json,
    is_active,
    created_at,
    updated_at
FROM layouts";

/// Repository interface for layout snapshots.
pub trait LayoutRepository {
    /// Inserts a new layout under `name`, or updates the payload of the
    /// existing one. Returns the stored record either way.
    fn save(&self, name: &str, layout_json: &str) -> RepoResult<Layout>;
    /// Gets one layout by surrogate id.
    fn get(&self, id: LayoutId) -> RepoResult<Layout>;
    /// Returns every layout, most recently saved first.
    fn list_all(&self) -> RepoResult<Vec<Layout>>;
    /// Makes the layout with `id` the single active one.
    fn set_active(&mut self, id: LayoutId) -> RepoResult<()>;
    /// Returns the active layout, if any.
    fn get_active(&self) -> RepoResult<Option<Layout>>;
    /// Removes one layout. A missing id is a no-op.
    fn delete(&self, id: LayoutId) -> RepoResult<()>;
}

/// SQLite-backed layout repository.
///
/// Holds the connection mutably because activation runs a transaction.
pub struct SqliteLayoutRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteLayoutRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn new(conn: &'conn mut Connection) -> Self {
        Self { conn }
    }

    fn get_by_name(&self, name: &str) -> RepoResult<Layout> {
        let mut stmt = self
            .conn
            .prepare(&format!("{LAYOUT_SELECT_SQL} WHERE name = ?1;"))?;
        let mut rows = stmt.query([name])?;
        if let Some(row) = rows.next()? {
            return parse_layout_row(row);
        }
        Err(RepoError::InvalidData(format!(
            "layout `{name}` missing immediately after upsert"
        )))
    }
}

impl LayoutRepository for SqliteLayoutRepository<'_> {
    fn save(&self, name: &str, layout_json: &str) -> RepoResult<Layout> {
        // New rows start inactive; re-saves leave is_active and
        // created_at untouched.
        self.conn.execute(
            "INSERT INTO layouts (name, layout_json)
             VALUES (?1, ?2)
             ON CONFLICT(name) DO UPDATE SET
                layout_json = excluded.layout_json,
                updated_at = strftime('%s', 'now');",
            params![name, layout_json],
        )?;

        self.get_by_name(name)
    }

    fn get(&self, id: LayoutId) -> RepoResult<Layout> {
        let mut stmt = self
            .conn
            .prepare(&format!("{LAYOUT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return parse_layout_row(row);
        }
        Err(RepoError::NotFound(id))
    }

    fn list_all(&self) -> RepoResult<Vec<Layout>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{LAYOUT_SELECT_SQL} ORDER BY updated_at DESC, id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut layouts = Vec::new();
        while let Some(row) = rows.next()? {
            layouts.push(parse_layout_row(row)?);
        }
        Ok(layouts)
    }

    fn set_active(&mut self, id: LayoutId) -> RepoResult<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute("UPDATE layouts SET is_active = 0 WHERE is_active = 1;", [])?;
        // A missing id leaves every row inactive rather than failing;
        // the GUI treats that as "no active layout".
        tx.execute("UPDATE layouts SET is_active = 1 WHERE id = ?1;", [id])?;

        tx.commit()?;
        Ok(())
    }

    fn get_active(&self) -> RepoResult<Option<Layout>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{LAYOUT_SELECT_SQL} WHERE is_active = 1 LIMIT 1;"))?;
        let mut rows = stmt.query([])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_layout_row(row)?));
        }
        Ok(None)
    }

    fn delete(&self, id: LayoutId) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM layouts WHERE id = ?1;", [id])?;
        Ok(())
    }
}

fn parse_layout_row(row: &Row<'_>) -> RepoResult<Layout> {
    Ok(Layout {
        id: row.get("id")?,
        name: row.get("name")?,
        layout_json: row.get("layout_json")?,
        is_active: int_to_bool(row.get("is_active")?, "layouts.is_active")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}
