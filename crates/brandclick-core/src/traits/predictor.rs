use crate::errors::BrandclickResult;
use crate::models::PredictionOutcome;
use crate::types::{FeatureVector, PredictionRequest};

/// Brand-click predictor.
pub trait IPredictor: Send + Sync {
    /// Predict from validated features.
    fn predict(&self, features: &FeatureVector) -> PredictionOutcome;

    /// Validate raw front-end inputs and predict.
    fn compute_on_demand(&self, request: &PredictionRequest) -> BrandclickResult<PredictionOutcome>;
}
