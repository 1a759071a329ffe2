//! Record models persisted by the framedock storage core.
//!
//! # Responsibility
//! - Define the data structures crossing the GUI facade boundary.
//!
//! # Invariants
//! - Timestamps are Unix seconds (`i64`) everywhere.
//! - Singleton storage ids (fixed id = 1 rows) never appear on models.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod layout;
pub mod setting;
pub mod window_state;
