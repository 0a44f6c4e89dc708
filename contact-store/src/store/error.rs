use crate::storage::StorageError;
use shared::ValidationError;
use thiserror::Error;

/// Store errors
///
/// Validation failures happen before any mutation. A persistence
/// failure means the in-memory mutation already happened and storage is
/// stale until the next successful write; callers notify the user, they
/// do not roll back. Every error is terminal for its operation only;
/// the store stays usable.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to save contacts: {0}")]
    Persistence(#[from] StorageError),
}

pub type StoreResult<T> = Result<T, StoreError>;
