//! Application facade exposed to the GUI shell.
//!
//! # Responsibility
//! - Own the single database connection for the process lifetime.
//! - Provide the synchronous CRUD surface the frontend binds to.
//!
//! # Invariants
//! - The connection is opened and migrated before any method is
//!   callable; every call serializes on this one connection.
//! - Methods delegate 1:1 to the repositories and never add retry or
//!   recovery logic; errors reach the GUI boundary unchanged.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::db::{open_app_db, open_db_in_memory, DbError, DbResult};
use crate::model::layout::{Layout, LayoutId};
use crate::model::setting::Setting;
use crate::model::window_state::WindowState;
use crate::repo::layout_repo::{LayoutRepository, SqliteLayoutRepository};
use crate::repo::settings_repo::{SettingsRepository, SqliteSettingsRepository};
use crate::repo::window_repo::{SqliteWindowStateRepository, WindowStateRepository};
use crate::repo::RepoResult;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Facade over the record store, bound to one open connection.
///
/// The GUI shell constructs one instance at startup and calls it from a
/// single dispatch context; all operations block until done.
pub struct AppService {
    conn: Connection,
}

impl AppService {
    /// Opens (and migrates) the application database under `app_data_dir`,
    /// creating the directory if needed.
    pub fn open(app_data_dir: impl AsRef<Path>) -> DbResult<Self> {
        Ok(Self {
            conn: open_app_db(app_data_dir)?,
        })
    }

    /// Opens an in-memory database. For tests and tooling.
    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }

    /// Path of the backing database file. `None` for in-memory databases.
    pub fn db_path(&self) -> Option<PathBuf> {
        self.conn.path().map(PathBuf::from)
    }

    /// Releases the connection explicitly at shutdown.
    pub fn close(self) -> DbResult<()> {
        self.conn
            .close()
            .map_err(|(_conn, err)| DbError::Sqlite(err))
    }

    // --- Settings ---

    /// Returns the value stored under `key`, or `None` if unset.
    pub fn get_setting(&self, key: &str) -> RepoResult<Option<String>> {
        SqliteSettingsRepository::new(&self.conn).get(key)
    }

    /// Creates or updates one preference.
    pub fn set_setting(&self, key: &str, value: &str) -> RepoResult<()> {
        SqliteSettingsRepository::new(&self.conn).set(key, value)
    }

    /// Returns every stored preference.
    pub fn get_all_settings(&self) -> RepoResult<Vec<Setting>> {
        SqliteSettingsRepository::new(&self.conn).list_all()
    }

    // --- Layouts ---

    /// Creates or updates the layout saved under `name` and returns the
    /// stored record, including its assigned id.
    pub fn save_layout(&mut self, name: &str, layout_json: &str) -> RepoResult<Layout> {
        SqliteLayoutRepository::new(&mut self.conn).save(name, layout_json)
    }

    /// Returns every saved layout, most recently saved first.
    pub fn get_all_layouts(&mut self) -> RepoResult<Vec<Layout>> {
        SqliteLayoutRepository::new(&mut self.conn).list_all()
    }

    /// Returns the layout with the given id.
    pub fn get_layout(&mut self, id: LayoutId) -> RepoResult<Layout> {
        SqliteLayoutRepository::new(&mut self.conn).get(id)
    }

    /// Makes `id` the single active layout.
    pub fn set_active_layout(&mut self, id: LayoutId) -> RepoResult<()> {
        SqliteLayoutRepository::new(&mut self.conn).set_active(id)
    }

    /// Returns the active layout, if any.
    pub fn get_active_layout(&mut self) -> RepoResult<Option<Layout>> {
        SqliteLayoutRepository::new(&mut self.conn).get_active()
    }

    /// Deletes the layout with the given id; missing ids are a no-op.
    pub fn delete_layout(&mut self, id: LayoutId) -> RepoResult<()> {
        SqliteLayoutRepository::new(&mut self.conn).delete(id)
    }

    // --- Window state ---

    /// Saves the window geometry wholesale.
    pub fn save_window_state(
        &self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        maximized: bool,
    ) -> RepoResult<()> {
        SqliteWindowStateRepository::new(&self.conn).save(x, y, width, height, maximized)
    }

    /// Returns the saved window geometry, or `None` before the first save.
    pub fn get_window_state(&self) -> RepoResult<Option<WindowState>> {
        SqliteWindowStateRepository::new(&self.conn).get()
    }
}
