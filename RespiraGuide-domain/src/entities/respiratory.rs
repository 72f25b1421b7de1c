use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coarse respiratory status from oxygen saturation and respiration rate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RespiratoryStatus {
    /// Oxygen saturation below the low-O2 threshold
    LowO2,

    /// Respiration rate above the normal maximum with adequate oxygen
    FastBreathing,

    /// Neither of the above
    Ok,
}

impl RespiratoryStatus {
    /// Rule priority, 1 being checked first
    pub fn priority(&self) -> u8 {
        match self {
            RespiratoryStatus::LowO2 => 1,
            RespiratoryStatus::FastBreathing => 2,
            RespiratoryStatus::Ok => 3,
        }
    }

    /// Whether the status needs attention
    pub fn is_concerning(&self) -> bool {
        !matches!(self, RespiratoryStatus::Ok)
    }
}

impl std::fmt::Display for RespiratoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RespiratoryStatus::LowO2 => write!(f, "LOW O2"),
            RespiratoryStatus::FastBreathing => write!(f, "FAST BREATHING"),
            RespiratoryStatus::Ok => write!(f, "OK"),
        }
    }
}

/// Breathing frequency bucket from respiration rate alone
///
/// Variants are declared in ascending respiration rate, so the derived
/// ordering follows the rate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BreathingFrequency {
    /// Below 6 breaths per minute
    Suspicious,

    /// 6 to under 12 breaths per minute
    Slow,

    /// 12 to 20 breaths per minute
    Normal,

    /// Above 20 breaths per minute
    Fast,
}

impl std::fmt::Display for BreathingFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BreathingFrequency::Suspicious => write!(f, "SUSPICIOUS"),
            BreathingFrequency::Slow => write!(f, "SLOW"),
            BreathingFrequency::Normal => write!(f, "NORMAL"),
            BreathingFrequency::Fast => write!(f, "FAST"),
        }
    }
}

/// Both classifications for one set of readings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespiratoryAssessment {
    /// Name of the assessed patient
    pub patient_name: String,

    /// Breaths per minute
    pub respiration_rate: i32,

    /// Oxygen saturation percentage
    pub oxygen_saturation: f64,

    /// Respiratory status result
    pub status: RespiratoryStatus,

    /// Breathing frequency result
    pub frequency: BreathingFrequency,

    /// When the assessment was made
    pub assessed_at: DateTime<Utc>,
}

impl RespiratoryAssessment {
    /// Serialize the assessment for handing on to other systems
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
