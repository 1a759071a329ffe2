//! Repository layer: record store contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts per entity.
//! - Isolate SQL details from the facade service.
//!
//! # Invariants
//! - Absent rows are a normal outcome (`Option`), except layout-by-id
//!   which reports `RepoError::NotFound`.
//! - Storage failures propagate unchanged; nothing is retried here.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::db::DbError;
use crate::model::layout::LayoutId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod layout_repo;
pub mod settings_repo;
pub mod window_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic record store error shared by all repositories.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(LayoutId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "layout not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

pub(crate) fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}

/// Validates a persisted 0/1 flag instead of masking corrupt rows.
pub(crate) fn int_to_bool(value: i64, column: &str) -> RepoResult<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "invalid flag value `{other}` in {column}"
        ))),
    }
}
