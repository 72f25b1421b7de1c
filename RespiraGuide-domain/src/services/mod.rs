pub mod classifier;
pub mod rules;

// Domain services
// This module contains the classification rules and the classifier service.

// Re-export service traits and factory functions
pub use classifier::{
    create_default_respiratory_classifier, ClassifierError, RespiratoryClassifier,
    RespiratoryClassifierTrait,
};
