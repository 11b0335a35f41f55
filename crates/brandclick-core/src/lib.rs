//! # brandclick-core
//!
//! Foundation crate for the brand-click prediction engine.
//! Defines types, model parameters, result models, errors, config,
//! tracing setup and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod params;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::BrandclickConfig;
pub use errors::{BrandclickError, BrandclickResult};
pub use models::{ContributionBreakdown, PredictionOutcome, SecondaryBreakdown};
pub use params::{
    CoefficientSet, ModelParameters, ModelVariant, RoundingPolicy, SeasonalityTable,
    SecondaryMetric,
};
pub use types::{Factor, FeatureVector, Month, PredictionRequest};
