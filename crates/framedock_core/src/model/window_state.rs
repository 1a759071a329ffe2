//! Window geometry model.

use serde::{Deserialize, Serialize};

/// Last saved main-window position and size.
///
/// Saved wholesale on every write; there is no partial-field update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowState {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub maximized: bool,
    /// Unix seconds of the most recent save.
    pub updated_at: i64,
}
