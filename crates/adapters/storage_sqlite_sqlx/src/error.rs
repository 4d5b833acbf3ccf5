//! Storage-specific error type and vendor-code translation.

use garage_domain::error::{ConflictError, GarageError};

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for GarageError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

/// Translate a sqlx error into the domain taxonomy.
///
/// A unique-constraint violation becomes [`GarageError::Conflict`]; every
/// other failure is wrapped as [`GarageError::Storage`]. This is the single
/// place where vendor error codes are inspected.
pub(crate) fn translate(err: sqlx::Error) -> GarageError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            return ConflictError {
                detail: db.message().to_string(),
            }
            .into();
        }
    }
    StorageError::Database(err).into()
}
