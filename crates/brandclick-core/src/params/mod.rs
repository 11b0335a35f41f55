//! Model parameters: coefficients, seasonality table, rounding and GA scaling.
//!
//! Two historical variants of the tool disagree on all of these. Both are
//! available as [`ModelVariant`] presets and every value can be overridden
//! from configuration, so the engine never reads process-wide constants.

pub mod coefficients;
pub mod parameters;
pub mod rounding;
pub mod seasonality;
pub mod secondary;
pub mod variant;

pub use coefficients::CoefficientSet;
pub use parameters::ModelParameters;
pub use rounding::{round_one_decimal, RoundingPolicy};
pub use seasonality::SeasonalityTable;
pub use secondary::SecondaryMetric;
pub use variant::ModelVariant;
