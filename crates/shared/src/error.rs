//! Error types for record lookups

use thiserror::Error;

/// Failure of the external record store.
///
/// Kept separate from a "not found" answer: a lookup that fails is an
/// operational problem, never a deny verdict.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Record store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for LookupError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                LookupError::Unavailable(err.to_string())
            }
            _ => LookupError::Database(err.to_string()),
        }
    }
}
