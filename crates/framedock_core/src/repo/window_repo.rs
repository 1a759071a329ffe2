//! Window state repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the singleton window geometry row.
//!
//! # Invariants
//! - Every save overwrites all fields; there is no partial update.
//! - The row uses the fixed storage id 1 and never multiplies.

use crate::model::window_state::WindowState;
use crate::repo::{bool_to_int, int_to_bool, RepoResult};
use rusqlite::{params, Connection};

/// Repository interface for window geometry.
pub trait WindowStateRepository {
    /// Upserts the singleton geometry row wholesale.
    fn save(&self, x: i32, y: i32, width: i32, height: i32, maximized: bool) -> RepoResult<()>;
    /// Returns the saved geometry, or `None` before the first save.
    fn get(&self) -> RepoResult<Option<WindowState>>;
}

/// SQLite-backed window state repository.
pub struct SqliteWindowStateRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteWindowStateRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl WindowStateRepository for SqliteWindowStateRepository<'_> {
    fn save(&self, x: i32, y: i32, width: i32, height: i32, maximized: bool) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO window_state (id, x, y, width, height, maximized, updated_at)
             VALUES (1, ?1, ?2, ?3, ?4, ?5, strftime('%s', 'now'))
             ON CONFLICT(id) DO UPDATE SET
                x = excluded.x,
                y = excluded.y,
                width = excluded.width,
                height = excluded.height,
                maximized = excluded.maximized,
                updated_at = excluded.updated_at;",
            params![x, y, width, height, bool_to_int(maximized)],
        )?;
        Ok(())
    }

    fn get(&self) -> RepoResult<Option<WindowState>> {
        let mut stmt = self.conn.prepare(
            "SELECT x, y, width, height, maximized, updated_at
             FROM window_state
             WHERE id = 1;",
        )?;
        let mut rows = stmt.query([])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(WindowState {
                x: row.get("x")?,
                y: row.get("y")?,
                width: row.get("width")?,
                height: row.get("height")?,
                maximized: int_to_bool(row.get("maximized")?, "window_state.maximized")?,
                updated_at: row.get("updated_at")?,
            }));
        }
        Ok(None)
    }
}
