//! Coefficient overrides.

use serde::{Deserialize, Serialize};

use crate::params::CoefficientSet;

/// Per-weight overrides on top of the selected variant's coefficients.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CoefficientConfig {
    pub seasonality: Option<f64>,
    pub awareness: Option<f64>,
    pub branded_search: Option<f64>,
    pub publications: Option<f64>,
    pub intercept: Option<f64>,
}

impl CoefficientConfig {
    /// Apply the overrides that are set to `base`.
    pub fn apply_to(&self, base: CoefficientSet) -> CoefficientSet {
        CoefficientSet {
            seasonality: self.seasonality.unwrap_or(base.seasonality),
            awareness: self.awareness.unwrap_or(base.awareness),
            branded_search: self.branded_search.unwrap_or(base.branded_search),
            publications: self.publications.unwrap_or(base.publications),
            intercept: self.intercept.unwrap_or(base.intercept),
        }
    }

    /// Every field set from a concrete coefficient set.
    pub fn from_set(set: &CoefficientSet) -> Self {
        Self {
            seasonality: Some(set.seasonality),
            awareness: Some(set.awareness),
            branded_search: Some(set.branded_search),
            publications: Some(set.publications),
            intercept: Some(set.intercept),
        }
    }
}
