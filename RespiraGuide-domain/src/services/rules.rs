use crate::config::ClassifierConfig;
use crate::entities::respiratory::{BreathingFrequency, RespiratoryStatus};

/// Categorize respiratory status, low oxygen taking priority over fast breathing
pub fn categorize_respiratory_status(
    respiration_rate: i32,
    oxygen_saturation: f64,
    config: &ClassifierConfig,
) -> RespiratoryStatus {
    if oxygen_saturation < config.low_oxygen_saturation {
        RespiratoryStatus::LowO2
    } else if respiration_rate > config.max_normal_breathing_rate {
        RespiratoryStatus::FastBreathing
    } else {
        RespiratoryStatus::Ok
    }
}

/// Categorize breathing frequency from the respiration rate
pub fn categorize_breathing_frequency(
    respiration_rate: i32,
    config: &ClassifierConfig,
) -> BreathingFrequency {
    if respiration_rate < config.min_slow_breathing_rate {
        BreathingFrequency::Suspicious
    } else if respiration_rate < config.min_normal_breathing_rate {
        BreathingFrequency::Slow
    } else if respiration_rate <= config.max_normal_breathing_rate {
        BreathingFrequency::Normal
    } else {
        BreathingFrequency::Fast
    }
}

/// Weight check used by status classification: the plausible range
/// `[min_weight, max_weight]` is inclusive and a weight outside it is flagged
pub fn is_suspicious_weight(weight: f64, config: &ClassifierConfig) -> bool {
    weight < config.min_weight || weight > config.max_weight
}

/// Weight check used by frequency classification: the lower bound itself
/// is rejected
pub fn is_out_of_frequency_range(weight: f64, config: &ClassifierConfig) -> bool {
    weight <= config.min_weight || weight > config.max_weight
}
