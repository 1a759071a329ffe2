//! Saved UI-layout snapshot model.
//!
//! # Invariants
//! - `id` is a surrogate key assigned by storage; `name` is the identity
//!   callers save under.
//! - At most one layout is active across the whole store.

use serde::{Deserialize, Serialize};

/// Surrogate layout identifier assigned by storage.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type LayoutId = i64;

/// A named, persisted snapshot of the dock-panel arrangement.
///
/// `layout_json` is an opaque blob owned by the GUI layer; the storage
/// core never inspects its structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Storage-assigned surrogate key.
    pub id: LayoutId,
    /// Unique user-facing name the layout was saved under.
    pub name: String,
    /// Serialized panel arrangement, opaque to the storage core.
    pub layout_json: String,
    /// Whether this layout is the one currently applied by the GUI.
    pub is_active: bool,
    /// Unix seconds of first save.
    pub created_at: i64,
    /// Unix seconds of the most recent save.
    pub updated_at: i64,
}
