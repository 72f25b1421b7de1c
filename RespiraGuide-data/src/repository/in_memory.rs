use std::sync::{Arc, Mutex};
use tracing::trace;

use super::errors::RepositoryError;
use super::log_sink::LogSink;
use crate::models::LogEntry;

/// In-memory log sink
///
/// Clones share the same underlying entries. Entries are kept until
/// [`InMemoryLogSink::clear`] is called.
#[derive(Debug, Clone)]
pub struct InMemoryLogSink {
    /// Storage for appended entries
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Default for InMemoryLogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryLogSink {
    /// Create a new empty sink
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the appended messages, oldest first
    pub fn messages(&self) -> Result<Vec<String>, RepositoryError> {
        let store = self.entries.lock()?;
        Ok(store.iter().map(|entry| entry.message.clone()).collect())
    }

    /// Number of entries in the sink
    pub fn len(&self) -> Result<usize, RepositoryError> {
        let store = self.entries.lock()?;
        Ok(store.len())
    }

    /// Whether nothing has been appended yet
    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }

    /// Remove all entries
    pub fn clear(&self) -> Result<(), RepositoryError> {
        let mut store = self.entries.lock()?;
        store.clear();
        Ok(())
    }
}

impl LogSink for InMemoryLogSink {
    fn append(&self, message: &str) -> Result<(), RepositoryError> {
        let mut store = self.entries.lock()?;
        store.push(LogEntry::new(message));
        trace!(count = store.len(), "Appended log entry");
        Ok(())
    }

    fn entries(&self) -> Result<Vec<LogEntry>, RepositoryError> {
        let store = self.entries.lock()?;
        Ok(store.clone())
    }
}
