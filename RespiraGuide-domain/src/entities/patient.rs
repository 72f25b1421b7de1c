use serde::{Deserialize, Serialize};

/// A patient whose readings are being classified
///
/// Fields are read-only once constructed. Weight is taken as given; range
/// checks belong to the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    name: String,
    weight: f64,
    condition: String,
}

impl Patient {
    /// Create a new patient
    ///
    /// # Arguments
    /// * `name` - Name of the patient
    /// * `weight` - Body weight in kilograms
    /// * `condition` - Free-text medical condition, not used by classification
    pub fn new(name: impl Into<String>, weight: f64, condition: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weight,
            condition: condition.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }
}
