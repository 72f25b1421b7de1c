use chrono::{DateTime, Utc};
use respira_guide_data::repository::LogSink;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

/// Types of classification events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassificationEventType {
    /// A patient went through respiratory status classification
    Processed,
    /// Weight outside the plausible range, classification continued
    SuspiciousWeight,
    /// Weight outside the accepted range, classification refused
    InvalidWeight,
}

impl std::fmt::Display for ClassificationEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassificationEventType::Processed => write!(f, "PROCESSED"),
            ClassificationEventType::SuspiciousWeight => write!(f, "SUSPICIOUS_WEIGHT"),
            ClassificationEventType::InvalidWeight => write!(f, "INVALID_WEIGHT"),
        }
    }
}

/// Classification event record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationEvent {
    /// Type of classification event
    pub event_type: ClassificationEventType,
    /// Name of the patient the event is about
    pub patient_name: String,
    /// Timestamp when the event occurred
    pub timestamp: DateTime<Utc>,
    /// Patient weight, for weight events
    pub weight: Option<f64>,
    /// Additional details about the event
    pub details: Option<String>,
}

impl ClassificationEvent {
    /// Create a new classification event
    pub fn new(event_type: ClassificationEventType, patient_name: &str) -> Self {
        Self {
            event_type,
            patient_name: patient_name.to_string(),
            timestamp: Utc::now(),
            weight: None,
            details: None,
        }
    }

    /// Set the weight
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Set the details
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Message appended to the log sink for this event
    pub fn message(&self) -> String {
        match self.event_type {
            ClassificationEventType::Processed => format!("Processed {}", self.patient_name),
            ClassificationEventType::SuspiciousWeight => {
                format!("Invalid weight for {}", self.patient_name)
            }
            ClassificationEventType::InvalidWeight => match self.weight {
                Some(weight) => format!("Bad weight: {}", weight),
                None => format!("Bad weight for {}", self.patient_name),
            },
        }
    }
}

/// Log a classification event to tracing and append it to `sink`
///
/// A sink failure is reported and otherwise ignored.
pub fn log_classification_event<L: LogSink + ?Sized>(sink: &L, event: ClassificationEvent) {
    let details = event.details.as_deref().unwrap_or("");

    match event.event_type {
        ClassificationEventType::Processed => info!(
            "CLASSIFY-LOG [{}] [{}] [{}] {}",
            event.event_type,
            event.patient_name,
            event.timestamp.to_rfc3339(),
            details
        ),
        ClassificationEventType::SuspiciousWeight | ClassificationEventType::InvalidWeight => {
            warn!(
                weight = ?event.weight,
                "CLASSIFY-LOG [{}] [{}] [{}] {}",
                event.event_type,
                event.patient_name,
                event.timestamp.to_rfc3339(),
                details
            )
        }
    }

    if let Err(e) = sink.append(&event.message()) {
        error!("Failed to append classification event to log sink: {}", e);
    }
}

/// Log that a patient was processed
pub fn log_processed<L: LogSink + ?Sized>(sink: &L, patient_name: &str) {
    let event = ClassificationEvent::new(ClassificationEventType::Processed, patient_name);
    log_classification_event(sink, event);
}

/// Log a suspicious weight seen during status classification
pub fn log_suspicious_weight<L: LogSink + ?Sized>(sink: &L, patient_name: &str, weight: f64) {
    let event = ClassificationEvent::new(ClassificationEventType::SuspiciousWeight, patient_name)
        .with_weight(weight)
        .with_details("weight outside plausible range, classification continues");
    log_classification_event(sink, event);
}

/// Log a weight that made frequency classification fail
pub fn log_invalid_weight<L: LogSink + ?Sized>(sink: &L, patient_name: &str, weight: f64) {
    let event = ClassificationEvent::new(ClassificationEventType::InvalidWeight, patient_name)
        .with_weight(weight)
        .with_details("weight not in range");
    log_classification_event(sink, event);
}
