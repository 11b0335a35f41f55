use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SECONDARY_FACTOR;

/// Fixed-ratio conversion of clicks into the GA unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SecondaryMetric {
    pub factor: f64,
}

impl Default for SecondaryMetric {
    fn default() -> Self {
        Self {
            factor: DEFAULT_SECONDARY_FACTOR,
        }
    }
}

impl SecondaryMetric {
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }

    pub fn scale(&self, value: f64) -> f64 {
        value * self.factor
    }
}
