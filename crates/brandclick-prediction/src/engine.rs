//! PredictionEngine — owns resolved model parameters and answers prediction calls.
//!
//! Implements `IPredictor` from brandclick-core.

use brandclick_core::config::BrandclickConfig;
use brandclick_core::errors::{BrandclickResult, ConfigError, PredictionError};
use brandclick_core::models::PredictionOutcome;
use brandclick_core::params::{ModelParameters, ModelVariant};
use brandclick_core::traits::IPredictor;
use brandclick_core::types::{FeatureVector, Month, PredictionRequest};

use crate::formula::RawContributions;
use crate::secondary;

/// Stateless prediction engine. Parameters are fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct PredictionEngine {
    params: ModelParameters,
}

impl PredictionEngine {
    pub fn new(params: ModelParameters) -> Self {
        Self { params }
    }

    /// Engine with a variant's compiled defaults.
    pub fn for_variant(variant: ModelVariant) -> Self {
        Self::new(variant.parameters())
    }

    /// Engine with parameters resolved from configuration.
    pub fn from_config(config: &BrandclickConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.parameters()?))
    }

    pub fn parameters(&self) -> &ModelParameters {
        &self.params
    }

    /// Turn raw front-end inputs into a feature vector.
    ///
    /// Only type-level checks happen here: the month must be one of the
    /// twelve names and the numbers must be finite. Negative values are fine.
    pub fn validate_request(request: &PredictionRequest) -> Result<FeatureVector, PredictionError> {
        let month: Month = request.month.parse()?;
        for (field, value) in [
            ("awareness_spend", request.awareness_spend),
            ("branded_search_spend", request.branded_search_spend),
            ("publication_count", request.publication_count),
        ] {
            if !value.is_finite() {
                return Err(PredictionError::NonFiniteInput { field, value });
            }
        }
        Ok(FeatureVector::new(
            month,
            request.awareness_spend,
            request.branded_search_spend,
            request.publication_count,
        ))
    }
}

impl IPredictor for PredictionEngine {
    fn predict(&self, features: &FeatureVector) -> PredictionOutcome {
        let p = &self.params;
        let raw = RawContributions::compute(features, &p.coefficients, &p.seasonality);
        let primary = raw.breakdown(p.rounding);
        let secondary = p
            .secondary
            .as_ref()
            .map(|metric| secondary::compute(&raw, &primary, metric, p.rounding));

        tracing::debug!(
            month = %features.month,
            predicted = primary.predicted_value,
            ga = ?secondary.map(|s| s.predicted_value),
            rounding = %p.rounding,
            "prediction computed"
        );

        PredictionOutcome {
            features: *features,
            seasonality_index: p.seasonality.lookup(features.month),
            rounding: p.rounding,
            primary,
            secondary,
        }
    }

    fn compute_on_demand(&self, request: &PredictionRequest) -> BrandclickResult<PredictionOutcome> {
        let features = Self::validate_request(request).inspect_err(|e| {
            tracing::debug!(error = %e, "rejected prediction request");
        })?;
        Ok(self.predict(&features))
    }
}
