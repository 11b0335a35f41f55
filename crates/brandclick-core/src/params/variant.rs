use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{CoefficientSet, ModelParameters, RoundingPolicy, SeasonalityTable, SecondaryMetric};
use crate::constants::*;

/// Historical deployments of the tool, each with its own fitted model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelVariant {
    /// First-generation form: full-precision output, no GA figures, no export.
    Baseline,
    /// Refit model with per-stage rounding, GA figures and CSV export.
    #[default]
    Extended,
}

impl ModelVariant {
    pub fn coefficients(self) -> CoefficientSet {
        match self {
            Self::Baseline => CoefficientSet::new(
                BASELINE_SEASONALITY_WEIGHT,
                BASELINE_AWARENESS_WEIGHT,
                BASELINE_BRANDED_SEARCH_WEIGHT,
                BASELINE_PUBLICATIONS_WEIGHT,
                BASELINE_INTERCEPT,
            ),
            Self::Extended => CoefficientSet::new(
                EXTENDED_SEASONALITY_WEIGHT,
                EXTENDED_AWARENESS_WEIGHT,
                EXTENDED_BRANDED_SEARCH_WEIGHT,
                EXTENDED_PUBLICATIONS_WEIGHT,
                EXTENDED_INTERCEPT,
            ),
        }
    }

    pub fn rounding(self) -> RoundingPolicy {
        match self {
            Self::Baseline => RoundingPolicy::Unrounded,
            Self::Extended => RoundingPolicy::PerStage,
        }
    }

    pub fn secondary(self) -> Option<SecondaryMetric> {
        match self {
            Self::Baseline => None,
            Self::Extended => Some(SecondaryMetric::default()),
        }
    }

    /// Complete parameter set for this variant.
    pub fn parameters(self) -> ModelParameters {
        ModelParameters {
            coefficients: self.coefficients(),
            seasonality: SeasonalityTable::uq2019(),
            rounding: self.rounding(),
            secondary: self.secondary(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Extended => "extended",
        }
    }
}

impl fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "baseline" => Ok(Self::Baseline),
            "extended" => Ok(Self::Extended),
            other => Err(format!("unknown variant {other:?} (expected baseline|extended)")),
        }
    }
}
