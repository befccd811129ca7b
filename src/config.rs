use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::{MlErr, Result};

/// Knobs of a training run, read from an optional JSON file.
///
/// Every missing field falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainingConfig {
    pub learning_rate: f32,
    pub iterations: usize,
    /// Seed for both the shuffle and the initial weights.
    pub seed: Option<u64>,
    /// Amount of shuffled records held out for validation.
    pub dev_size: usize,
    /// Training example whose prediction is shown once training is done.
    pub sample_index: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.10,
            iterations: 500,
            seed: None,
            dev_size: 1000,
            sample_index: 119,
        }
    }
}

impl TrainingConfig {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn from_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
        serde_json::from_reader(reader)
    }

    /// Checks the values make sense for a training run.
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0. {
            return Err(MlErr::InvalidConfig(
                "learning_rate must be a positive finite number",
            ));
        }

        Ok(())
    }
}
