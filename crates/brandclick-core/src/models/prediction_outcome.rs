use serde::{Deserialize, Serialize};

use super::{ContributionBreakdown, SecondaryBreakdown};
use crate::params::RoundingPolicy;
use crate::types::FeatureVector;

/// Result of one prediction call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionOutcome {
    pub features: FeatureVector,
    /// Seasonality index the month resolved to.
    pub seasonality_index: u32,
    pub rounding: RoundingPolicy,
    pub primary: ContributionBreakdown,
    /// Present only when the GA metric is enabled.
    pub secondary: Option<SecondaryBreakdown>,
}

impl PredictionOutcome {
    pub fn predicted_value(&self) -> f64 {
        self.primary.predicted_value
    }

    pub fn predicted_secondary(&self) -> Option<f64> {
        self.secondary.map(|s| s.predicted_value)
    }
}
