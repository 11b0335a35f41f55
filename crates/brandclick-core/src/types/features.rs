use serde::{Deserialize, Serialize};

use super::Month;

/// Validated model inputs for one prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub month: Month,
    /// Awareness spend (JPY).
    pub awareness_spend: f64,
    /// Branded-search spend (JPY).
    pub branded_search_spend: f64,
    pub publication_count: f64,
}

impl FeatureVector {
    pub fn new(
        month: Month,
        awareness_spend: f64,
        branded_search_spend: f64,
        publication_count: f64,
    ) -> Self {
        Self {
            month,
            awareness_spend,
            branded_search_spend,
            publication_count,
        }
    }
}

/// Raw inputs as collected by a front end, before month and number checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub month: String,
    #[serde(default)]
    pub awareness_spend: f64,
    #[serde(default)]
    pub branded_search_spend: f64,
    #[serde(default)]
    pub publication_count: f64,
}
