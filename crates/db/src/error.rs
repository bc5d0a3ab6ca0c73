//! Classification of storage failures.
//!
//! Handlers need to tell "the row is gone" apart from "a constraint refused
//! the write" and "the database is unreachable" without string-matching
//! driver messages. [`StorageErrorKind::classify`] maps a `sqlx::Error` onto
//! that small taxonomy.

/// PostgreSQL SQLSTATE codes in class 23 (integrity constraint violation).
const PG_UNIQUE_VIOLATION: &str = "23505";
const PG_FOREIGN_KEY_VIOLATION: &str = "23503";
const PG_NOT_NULL_VIOLATION: &str = "23502";
const PG_CHECK_VIOLATION: &str = "23514";

/// What kind of storage failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorKind {
    /// A query expecting exactly one row found none.
    NotFound,
    /// A unique, foreign-key, not-null, or check constraint rejected the write.
    ConstraintViolation,
    /// The database could not be reached or the pool is exhausted.
    Connection,
    /// Anything else (bad SQL, decode failure, ...).
    Other,
}

impl StorageErrorKind {
    pub fn classify(err: &sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StorageErrorKind::NotFound,
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                Some(
                    PG_UNIQUE_VIOLATION
                    | PG_FOREIGN_KEY_VIOLATION
                    | PG_NOT_NULL_VIOLATION
                    | PG_CHECK_VIOLATION,
                ) => StorageErrorKind::ConstraintViolation,
                _ => StorageErrorKind::Other,
            },
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => StorageErrorKind::Connection,
            _ => StorageErrorKind::Other,
        }
    }
}
