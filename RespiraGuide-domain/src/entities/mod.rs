// Domain entities and value objects
pub mod patient;
pub mod respiratory;

// Re-export common types for easier imports
pub use patient::Patient;
pub use respiratory::{BreathingFrequency, RespiratoryAssessment, RespiratoryStatus};
