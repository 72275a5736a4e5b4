use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Flight configuration is locked")]
    Locked,

    #[error("Flight state was modified by another writer")]
    RevisionConflict,
}

pub type Result<T> = std::result::Result<T, StorageError>;
