//! Classification thresholds
//!
//! Defaults match the clinical constants the rules were written against.
//! Every threshold can be overridden through `RESPIRA_*` environment
//! variables, optionally loaded from a `.env` file.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};
use validator::Validate;

pub const ENV_MIN_WEIGHT: &str = "RESPIRA_MIN_WEIGHT";
pub const ENV_MAX_WEIGHT: &str = "RESPIRA_MAX_WEIGHT";
pub const ENV_LOW_OXYGEN_SATURATION: &str = "RESPIRA_LOW_OXYGEN_SATURATION";
pub const ENV_MIN_SLOW_BREATHING_RATE: &str = "RESPIRA_MIN_SLOW_BREATHING_RATE";
pub const ENV_MIN_NORMAL_BREATHING_RATE: &str = "RESPIRA_MIN_NORMAL_BREATHING_RATE";
pub const ENV_MAX_NORMAL_BREATHING_RATE: &str = "RESPIRA_MAX_NORMAL_BREATHING_RATE";

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("Could not parse {key}={value}")]
    Parse { key: String, value: String },

    /// The thresholds are out of range or inconsistent
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Thresholds used by the respiratory classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ClassifierConfig {
    /// Lower bound of the plausible weight range in kilograms
    #[validate(range(min = 0.0, max = 1000.0, message = "Minimum weight must be between 0 and 1000"))]
    pub min_weight: f64,

    /// Upper bound of the plausible weight range in kilograms
    #[validate(range(min = 0.0, max = 1000.0, message = "Maximum weight must be between 0 and 1000"))]
    pub max_weight: f64,

    /// Oxygen saturation below this is classified as low O2
    #[validate(range(min = 0.0, max = 100.0, message = "Low oxygen saturation must be between 0 and 100"))]
    pub low_oxygen_saturation: f64,

    /// Rates below this are suspicious
    #[validate(range(min = 0, max = 200, message = "Slow breathing rate must be between 0 and 200"))]
    pub min_slow_breathing_rate: i32,

    /// Rates below this (and at least the slow rate) are slow
    #[validate(range(min = 0, max = 200, message = "Normal breathing rate must be between 0 and 200"))]
    pub min_normal_breathing_rate: i32,

    /// Rates up to and including this are normal, above it fast
    #[validate(range(min = 0, max = 200, message = "Maximum normal breathing rate must be between 0 and 200"))]
    pub max_normal_breathing_rate: i32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_weight: 50.0,
            max_weight: 120.0,
            low_oxygen_saturation: 88.0,
            min_slow_breathing_rate: 6,
            min_normal_breathing_rate: 12,
            max_normal_breathing_rate: 20,
        }
    }
}

impl ClassifierConfig {
    /// Load thresholds from the environment, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        if dotenv::dotenv().is_err() {
            debug!(".env file not found, reading thresholds from the process environment");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load thresholds through `lookup`, falling back to defaults for
    /// missing keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            min_weight: read_value(&lookup, ENV_MIN_WEIGHT, defaults.min_weight)?,
            max_weight: read_value(&lookup, ENV_MAX_WEIGHT, defaults.max_weight)?,
            low_oxygen_saturation: read_value(
                &lookup,
                ENV_LOW_OXYGEN_SATURATION,
                defaults.low_oxygen_saturation,
            )?,
            min_slow_breathing_rate: read_value(
                &lookup,
                ENV_MIN_SLOW_BREATHING_RATE,
                defaults.min_slow_breathing_rate,
            )?,
            min_normal_breathing_rate: read_value(
                &lookup,
                ENV_MIN_NORMAL_BREATHING_RATE,
                defaults.min_normal_breathing_rate,
            )?,
            max_normal_breathing_rate: read_value(
                &lookup,
                ENV_MAX_NORMAL_BREATHING_RATE,
                defaults.max_normal_breathing_rate,
            )?,
        };

        config.check()?;
        info!(?config, "Loaded classifier thresholds");
        Ok(config)
    }

    /// Check ranges and the ordering between thresholds
    pub fn check(&self) -> Result<(), ConfigError> {
        if let Err(validation_errors) = self.validate() {
            let mut messages: Vec<String> = validation_errors
                .field_errors()
                .iter()
                .map(|(field, errors)| {
                    let error_msgs: Vec<String> = errors
                        .iter()
                        .map(|err| match &err.message {
                            Some(msg) => msg.to_string(),
                            None => format!("Invalid {}", field),
                        })
                        .collect();
                    format!("{}: {}", field, error_msgs.join(", "))
                })
                .collect();
            messages.sort();
            return Err(ConfigError::Invalid(messages.join("; ")));
        }

        if self.min_weight >= self.max_weight {
            return Err(ConfigError::Invalid(
                "Minimum weight must be below maximum weight".to_string(),
            ));
        }

        if self.min_slow_breathing_rate >= self.min_normal_breathing_rate
            || self.min_normal_breathing_rate > self.max_normal_breathing_rate
        {
            return Err(ConfigError::Invalid(
                "Breathing rates must satisfy slow < normal <= maximum normal".to_string(),
            ));
        }

        Ok(())
    }
}

fn read_value<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::Parse {
            key: key.to_string(),
            value: raw,
        }),
        None => Ok(default),
    }
}
