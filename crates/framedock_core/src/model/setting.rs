//! Key-value preference model.

use serde::{Deserialize, Serialize};

/// One persisted application preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub key: String,
    pub value: String,
    /// Unix seconds of first write.
    pub created_at: i64,
    /// Unix seconds of the most recent write.
    pub updated_at: i64,
}
