//! Configuration system for brandclick.
//! TOML-based, layered resolution: CLI > env > project (or explicit file) > user > variant defaults.

pub mod brandclick_config;
pub mod coefficient_config;
pub mod observability_config;
pub mod rounding_config;
pub mod secondary_config;

pub use brandclick_config::{BrandclickConfig, CliOverrides};
pub use coefficient_config::CoefficientConfig;
pub use observability_config::ObservabilityConfig;
pub use rounding_config::RoundingConfig;
pub use secondary_config::SecondaryConfig;
