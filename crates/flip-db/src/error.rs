//! # Database Error Types
//!
//! Error types for storage collaborator operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  EngineError (engine module) ← What API callers see                    │
//! │                                                                         │
//! │  Every DbError other than NotFound is the "storage unavailable"        │
//! │  category: recoverable, retryable by the CALLER, never swallowed.      │
//! │  The engine itself never retries - a blind retry loop around a         │
//! │  settlement could double-charge a bundle.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use flip_core::types::Status;

/// Storage collaborator errors.
///
/// These errors wrap sqlx errors and provide additional context
/// for debugging and user feedback.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found in database.
    ///
    /// ## When This Occurs
    /// - ID doesn't exist
    /// - Row was deleted concurrently (a stale reference)
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// A state update lost a race with a concurrent writer.
    ///
    /// ## When This Occurs
    /// - Two overlapping bundles settle the same item
    /// - A transition is applied against a stale read
    ///
    /// The row exists but its status is no longer what the writer read.
    /// Nothing was written; the caller re-reads and decides again.
    #[error("Concurrent update on item {id}: status is no longer {expected:?}")]
    Conflict { id: String, expected: Status },

    /// A CHECK constraint rejected the write.
    ///
    /// ## When This Occurs
    /// - Negative money value reached the database (the validation layer
    ///   should have caught it first; this is the backstop)
    #[error("Check constraint violation: {message}")]
    CheckViolation { message: String },

    /// A stored row contradicts the status invariant.
    ///
    /// ## When This Occurs
    /// - status says 'reserved' but reservation columns are NULL
    /// - status says 'sold' but sale columns are NULL
    /// - unparseable JSON in the image_urls column
    ///
    /// This only happens if something other than this crate wrote the row.
    #[error("Corrupt item row {id}: {reason}")]
    Corrupt { id: String, reason: String },

    /// Database connection failed.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        DbError::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Creates a Corrupt error for a row that violates the status invariant.
    pub fn corrupt(id: impl Into<String>, reason: impl Into<String>) -> Self {
        DbError::Corrupt {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → DbError::NotFound
/// sqlx::Error::Database       → CheckViolation if a CHECK fired, else QueryFailed
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound {
                entity: "Record",
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message().to_string();

                // SQLite reports constraint failures in the message text:
                // "CHECK constraint failed: <expr>"
                if msg.contains("CHECK constraint failed") {
                    DbError::CheckViolation { message: msg }
                } else {
                    DbError::QueryFailed(msg)
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::Migrate(e) => DbError::MigrationFailed(e.to_string()),

            other => DbError::Internal(other.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Convenience type alias for Results with DbError.
pub type DbResult<T> = Result<T, DbError>;
