use std::sync::PoisonError;
use thiserror::Error;

/// Error type for log sink operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Lock error
    #[error("Lock error: {0}")]
    Lock(String),
}

impl<T> From<PoisonError<T>> for RepositoryError {
    fn from(error: PoisonError<T>) -> Self {
        RepositoryError::Lock(error.to_string())
    }
}
