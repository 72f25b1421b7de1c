// RespiraGuide Domain
// This crate contains the respiratory classification rules and service

// Domain entities
pub mod entities;

// Services that implement business logic
pub mod services;

// Classification event logging
pub mod logging;

// Threshold configuration
pub mod config;

// Re-export the log sink types from respira_guide_data for convenience
pub use respira_guide_data::models::LogEntry;
pub use respira_guide_data::repository::{InMemoryLogSink, LogSink, RepositoryError};

pub use config::{ClassifierConfig, ConfigError};
pub use entities::{BreathingFrequency, Patient, RespiratoryAssessment, RespiratoryStatus};
pub use services::{
    create_default_respiratory_classifier, ClassifierError, RespiratoryClassifier,
    RespiratoryClassifierTrait,
};
