//! Storage core for the framedock desktop application.
//! This crate is the single source of truth for persistence invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::layout::{Layout, LayoutId};
pub use model::setting::Setting;
pub use model::window_state::WindowState;
pub use repo::layout_repo::{LayoutRepository, SqliteLayoutRepository};
pub use repo::settings_repo::{SettingsRepository, SqliteSettingsRepository};
pub use repo::window_repo::{SqliteWindowStateRepository, WindowStateRepository};
pub use repo::{RepoError, RepoResult};
pub use service::app_service::AppService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
