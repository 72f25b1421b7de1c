use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single message appended to a log sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique identifier for the entry
    pub id: String,

    /// The appended message
    pub message: String,

    /// When the entry was appended
    pub recorded_at: DateTime<Utc>,
}

impl LogEntry {
    /// Create a new entry stamped with the current time
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            message: message.into(),
            recorded_at: Utc::now(),
        }
    }
}
