//! Input-side types: months, contribution factors, and the feature vector.

pub mod factor;
pub mod features;
pub mod month;

pub use factor::Factor;
pub use features::{FeatureVector, PredictionRequest};
pub use month::Month;
