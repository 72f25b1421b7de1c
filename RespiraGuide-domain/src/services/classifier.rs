use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, error};

use crate::config::{ClassifierConfig, ConfigError};
use crate::entities::patient::Patient;
use crate::entities::respiratory::{BreathingFrequency, RespiratoryAssessment, RespiratoryStatus};
use crate::logging;
use crate::services::rules::{
    categorize_breathing_frequency, categorize_respiratory_status, is_out_of_frequency_range,
    is_suspicious_weight,
};
use respira_guide_data::repository::{InMemoryLogSink, LogSink};

/// Classifier errors
#[derive(Debug, Error, PartialEq)]
pub enum ClassifierError {
    /// An input was rejected before classification
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Trait for respiratory classification operations
pub trait RespiratoryClassifierTrait {
    /// Classify respiratory status from respiration rate and oxygen saturation
    ///
    /// Never fails. A weight outside the plausible range is logged as
    /// suspicious and classification continues.
    fn classify_respiratory_status(
        &self,
        patient: &Patient,
        respiration_rate: i32,
        oxygen_saturation: f64,
    ) -> RespiratoryStatus;

    /// Classify breathing frequency from respiration rate
    ///
    /// Fails with [`ClassifierError::InvalidArgument`] when the weight is at
    /// or below the minimum, or above the maximum. When `print` is set the
    /// result is written to the console.
    fn classify_breathing_frequency(
        &self,
        patient: &Patient,
        respiration_rate: i32,
        print: bool,
    ) -> Result<BreathingFrequency, ClassifierError>;

    /// Run both classifications on the same readings
    fn assess(
        &self,
        patient: &Patient,
        respiration_rate: i32,
        oxygen_saturation: f64,
        print: bool,
    ) -> Result<RespiratoryAssessment, ClassifierError>;
}

/// Respiratory classifier writing log entries to an injected sink
pub struct RespiratoryClassifier<L: LogSink, W: Write = io::Stdout> {
    config: ClassifierConfig,
    log_sink: L,
    console: Mutex<W>,
}

impl<L: LogSink> RespiratoryClassifier<L, io::Stdout> {
    /// Create a classifier with default thresholds printing to stdout
    pub fn new(log_sink: L) -> Self {
        Self::with_console(ClassifierConfig::default(), log_sink, io::stdout())
    }

    /// Create a classifier with thresholds read from the environment
    pub fn from_env(log_sink: L) -> Result<Self, ConfigError> {
        let config = ClassifierConfig::from_env()?;
        Ok(Self::with_console(config, log_sink, io::stdout()))
    }
}

impl<L: LogSink, W: Write> RespiratoryClassifier<L, W> {
    /// Create a classifier with explicit thresholds and console writer
    pub fn with_console(config: ClassifierConfig, log_sink: L, console: W) -> Self {
        Self {
            config,
            log_sink,
            console: Mutex::new(console),
        }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn log_sink(&self) -> &L {
        &self.log_sink
    }

    /// Consume the classifier and hand back the console writer
    pub fn into_console(self) -> W {
        self.console
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_console_line(&self, line: &str) {
        let mut console = self.console.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(console, "{}", line) {
            error!("Failed to write to console: {}", e);
        }
    }
}

impl<L: LogSink, W: Write> RespiratoryClassifierTrait for RespiratoryClassifier<L, W> {
    fn classify_respiratory_status(
        &self,
        patient: &Patient,
        respiration_rate: i32,
        oxygen_saturation: f64,
    ) -> RespiratoryStatus {
        if is_suspicious_weight(patient.weight(), &self.config) {
            self.write_console_line("Suspicious weight!");
            logging::log_suspicious_weight(&self.log_sink, patient.name(), patient.weight());
        }

        let status =
            categorize_respiratory_status(respiration_rate, oxygen_saturation, &self.config);
        debug!(
            patient = patient.name(),
            respiration_rate,
            oxygen_saturation,
            %status,
            priority = status.priority(),
            concerning = status.is_concerning(),
            "Classified respiratory status"
        );

        logging::log_processed(&self.log_sink, patient.name());
        status
    }

    fn classify_breathing_frequency(
        &self,
        patient: &Patient,
        respiration_rate: i32,
        print: bool,
    ) -> Result<BreathingFrequency, ClassifierError> {
        if is_out_of_frequency_range(patient.weight(), &self.config) {
            logging::log_invalid_weight(&self.log_sink, patient.name(), patient.weight());
            return Err(ClassifierError::InvalidArgument(
                "Weight is not in range.".to_string(),
            ));
        }

        let frequency = categorize_breathing_frequency(respiration_rate, &self.config);
        debug!(
            patient = patient.name(),
            respiration_rate,
            %frequency,
            "Classified breathing frequency"
        );

        if print {
            self.write_console_line(&format!(
                "Class result={} for {}",
                frequency,
                patient.name()
            ));
        }

        Ok(frequency)
    }

    fn assess(
        &self,
        patient: &Patient,
        respiration_rate: i32,
        oxygen_saturation: f64,
        print: bool,
    ) -> Result<RespiratoryAssessment, ClassifierError> {
        let status = self.classify_respiratory_status(patient, respiration_rate, oxygen_saturation);
        let frequency = self.classify_breathing_frequency(patient, respiration_rate, print)?;

        Ok(RespiratoryAssessment {
            patient_name: patient.name().to_string(),
            respiration_rate,
            oxygen_saturation,
            status,
            frequency,
            assessed_at: Utc::now(),
        })
    }
}

/// Create a classifier with default thresholds, an in-memory log sink and stdout
pub fn create_default_respiratory_classifier() -> impl RespiratoryClassifierTrait + Send + Sync {
    RespiratoryClassifier::new(InMemoryLogSink::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use mockall::predicate::eq;
    use respira_guide_data::models::LogEntry;
    use respira_guide_data::repository::RepositoryError;

    mock! {
        pub Sink {}

        impl LogSink for Sink {
            fn append(&self, message: &str) -> Result<(), RepositoryError>;
            fn entries(&self) -> Result<Vec<LogEntry>, RepositoryError>;
        }
    }

    /// Create a classifier writing its console output to a buffer
    fn create_test_classifier<L: LogSink>(sink: L) -> RespiratoryClassifier<L, Vec<u8>> {
        RespiratoryClassifier::with_console(ClassifierConfig::default(), sink, Vec::new())
    }

    fn console_text<L: LogSink>(classifier: RespiratoryClassifier<L, Vec<u8>>) -> String {
        String::from_utf8(classifier.into_console()).unwrap()
    }

    #[test]
    fn test_status_appends_processed_entry() {
        let mut sink = MockSink::new();
        sink.expect_append()
            .with(eq("Processed Alice"))
            .times(1)
            .returning(|_| Ok(()));

        let classifier = create_test_classifier(sink);
        let patient = Patient::new("Alice", 70.0, "asthma");

        let status = classifier.classify_respiratory_status(&patient, 22, 95.0);
        assert_eq!(status, RespiratoryStatus::FastBreathing);
        assert_eq!(console_text(classifier), "");
    }

    #[test]
    fn test_status_with_suspicious_weight_warns_then_processes() {
        let mut sink = MockSink::new();
        let mut seq = mockall::Sequence::new();
        sink.expect_append()
            .with(eq("Invalid weight for Cleo"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        sink.expect_append()
            .with(eq("Processed Cleo"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let classifier = create_test_classifier(sink);
        let patient = Patient::new("Cleo", 45.0, "");

        assert_eq!(
            classifier.classify_respiratory_status(&patient, 10, 96.0),
            RespiratoryStatus::Ok
        );
        assert_eq!(console_text(classifier), "Suspicious weight!\n");
    }

    #[test]
    fn test_status_survives_failing_sink() {
        let mut sink = MockSink::new();
        sink.expect_append()
            .times(2)
            .returning(|_| Err(RepositoryError::Lock("poisoned".to_string())));

        let classifier = create_test_classifier(sink);
        let patient = Patient::new("Zed", 130.0, "");

        assert_eq!(
            classifier.classify_respiratory_status(&patient, 18, 85.0),
            RespiratoryStatus::LowO2
        );
    }

    #[test]
    fn test_frequency_invalid_weight_logs_and_fails() {
        let mut sink = MockSink::new();
        sink.expect_append()
            .with(eq("Bad weight: 50"))
            .times(1)
            .returning(|_| Ok(()));

        let classifier = create_test_classifier(sink);
        let patient = Patient::new("Eve", 50.0, "");

        let result = classifier.classify_breathing_frequency(&patient, 15, true);
        assert_eq!(
            result,
            Err(ClassifierError::InvalidArgument("Weight is not in range.".to_string()))
        );
        assert_eq!(console_text(classifier), "");
    }

    #[test]
    fn test_frequency_valid_weight_does_not_touch_sink() {
        let mut sink = MockSink::new();
        sink.expect_append().never();

        let classifier = create_test_classifier(sink);
        let patient = Patient::new("Dan", 100.0, "");

        assert_eq!(
            classifier.classify_breathing_frequency(&patient, 4, false),
            Ok(BreathingFrequency::Suspicious)
        );
        assert_eq!(console_text(classifier), "");
    }

    #[test]
    fn test_frequency_print_writes_result_line() {
        let classifier = create_test_classifier(InMemoryLogSink::new());
        let patient = Patient::new("Bob", 80.0, "");

        assert_eq!(
            classifier.classify_breathing_frequency(&patient, 18, true),
            Ok(BreathingFrequency::Normal)
        );
        assert_eq!(console_text(classifier), "Class result=NORMAL for Bob\n");
    }

    #[test]
    fn test_assess_returns_both_results() {
        let sink = InMemoryLogSink::new();
        let classifier = create_test_classifier(sink.clone());
        let patient = Patient::new("Alice", 70.0, "asthma");

        let assessment = classifier.assess(&patient, 22, 95.0, false).unwrap();
        assert_eq!(assessment.patient_name, "Alice");
        assert_eq!(assessment.status, RespiratoryStatus::FastBreathing);
        assert_eq!(assessment.frequency, BreathingFrequency::Fast);
        assert_eq!(sink.messages().unwrap(), vec!["Processed Alice".to_string()]);
    }

    #[test]
    fn test_assess_propagates_invalid_weight_after_status_logging() {
        let sink = InMemoryLogSink::new();
        let classifier = create_test_classifier(sink.clone());
        let patient = Patient::new("Cleo", 45.0, "");

        let result = classifier.assess(&patient, 10, 96.0, false);
        assert!(matches!(result, Err(ClassifierError::InvalidArgument(_))));
        assert_eq!(
            sink.messages().unwrap(),
            vec![
                "Invalid weight for Cleo".to_string(),
                "Processed Cleo".to_string(),
                "Bad weight: 45".to_string(),
            ]
        );
    }

    #[test]
    fn test_error_display() {
        let error = ClassifierError::InvalidArgument("Weight is not in range.".to_string());
        assert_eq!(error.to_string(), "Invalid argument: Weight is not in range.");
    }
}
