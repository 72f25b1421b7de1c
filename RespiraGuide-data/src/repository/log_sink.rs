use std::sync::Arc;

use super::errors::RepositoryError;
use crate::models::LogEntry;

/// Destination for classification log messages
///
/// Implementations must be shareable across threads; the classifier only
/// ever needs `&self` access.
pub trait LogSink: Send + Sync {
    /// Append a message to the sink
    fn append(&self, message: &str) -> Result<(), RepositoryError>;

    /// Get every entry appended so far, oldest first
    fn entries(&self) -> Result<Vec<LogEntry>, RepositoryError>;
}

impl<T: LogSink + ?Sized> LogSink for Arc<T> {
    fn append(&self, message: &str) -> Result<(), RepositoryError> {
        (**self).append(message)
    }

    fn entries(&self) -> Result<Vec<LogEntry>, RepositoryError> {
        (**self).entries()
    }
}

impl<T: LogSink + ?Sized> LogSink for &T {
    fn append(&self, message: &str) -> Result<(), RepositoryError> {
        (**self).append(message)
    }

    fn entries(&self) -> Result<Vec<LogEntry>, RepositoryError> {
        (**self).entries()
    }
}
