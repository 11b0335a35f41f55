//! Top-level brandclick configuration with layered resolution.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize, Serializer};

use super::{CoefficientConfig, ObservabilityConfig, RoundingConfig, SecondaryConfig};
use crate::constants::{
    ENV_ROUNDING, ENV_SECONDARY_ENABLED, ENV_SECONDARY_FACTOR, ENV_VARIANT,
    PROJECT_CONFIG_FILENAME, USER_CONFIG_DIRNAME, USER_CONFIG_FILENAME,
};
use crate::errors::ConfigError;
use crate::params::{ModelParameters, ModelVariant, RoundingPolicy, SecondaryMetric};
use crate::types::Month;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`BRANDCLICK_*`)
/// 3. Explicit config file, or `brandclick.toml` in the project root
/// 4. User config (`~/.brandclick/config.toml`)
/// 5. Compiled defaults of the selected variant
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BrandclickConfig {
    /// Model preset the overrides apply to. Default: `extended`.
    pub variant: Option<ModelVariant>,
    pub coefficients: CoefficientConfig,
    /// Month name → seasonality index overrides.
    #[serde(serialize_with = "serialize_calendar_order")]
    pub seasonality_table: BTreeMap<String, u32>,
    pub rounding: RoundingConfig,
    pub secondary: SecondaryConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Replaces the project config layer; must exist.
    pub config_path: Option<PathBuf>,
    pub variant: Option<ModelVariant>,
    pub rounding: Option<RoundingPolicy>,
    pub secondary_enabled: Option<bool>,
    pub log_level: Option<String>,
}

impl BrandclickConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {
                        tracing::debug!(path = %user_config_path.display(), "applied user config");
                    }
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "skipping unreadable user config");
                    }
                }
            }
        }

        // Layer 3: explicit file, else project config
        match cli_overrides.and_then(|c| c.config_path.as_deref()) {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::FileNotFound {
                        path: path.display().to_string(),
                    });
                }
                Self::merge_toml_file(&mut config, path)?;
                tracing::debug!(path = %path.display(), "applied explicit config");
            }
            None => {
                let project_config_path = root.join(PROJECT_CONFIG_FILENAME);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                    tracing::debug!(path = %project_config_path.display(), "applied project config");
                }
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &BrandclickConfig) -> Result<(), ConfigError> {
        let c = &config.coefficients;
        for (field, value) in [
            ("coefficients.seasonality", c.seasonality),
            ("coefficients.awareness", c.awareness),
            ("coefficients.branded_search", c.branded_search),
            ("coefficients.publications", c.publications),
            ("coefficients.intercept", c.intercept),
        ] {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be a finite number".to_string(),
                    });
                }
            }
        }
        if let Some(factor) = config.secondary.factor {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "secondary.factor".to_string(),
                    message: "must be a finite number greater than 0".to_string(),
                });
            }
        }
        // Month names and positive indices.
        ModelVariant::default()
            .parameters()
            .seasonality
            .with_overrides(&config.seasonality_table)?;
        Ok(())
    }

    /// Resolve the variant preset plus overrides into engine parameters.
    pub fn parameters(&self) -> Result<ModelParameters, ConfigError> {
        Self::validate(self)?;

        let variant = self.variant.unwrap_or_default();
        let preset = variant.parameters();

        let enabled = self
            .secondary
            .enabled
            .unwrap_or(preset.secondary.is_some());
        let secondary = enabled.then(|| {
            self.secondary
                .factor
                .map(SecondaryMetric::new)
                .or(preset.secondary)
                .unwrap_or_default()
        });

        Ok(ModelParameters {
            coefficients: self.coefficients.apply_to(preset.coefficients),
            seasonality: preset.seasonality.with_overrides(&self.seasonality_table)?,
            rounding: self.rounding.policy.unwrap_or(preset.rounding),
            secondary,
        })
    }

    /// Fully populated copy of this config: every value the engine will use.
    pub fn resolved(&self) -> Result<Self, ConfigError> {
        let params = self.parameters()?;
        Ok(Self {
            variant: Some(self.variant.unwrap_or_default()),
            coefficients: CoefficientConfig::from_set(&params.coefficients),
            seasonality_table: params.seasonality.to_map(),
            rounding: RoundingConfig {
                policy: Some(params.rounding),
            },
            secondary: SecondaryConfig {
                enabled: Some(params.secondary.is_some()),
                factor: Some(params.secondary.unwrap_or_default().factor),
            },
            observability: ObservabilityConfig {
                log_level: Some(self.observability.effective_log_level().to_string()),
            },
        })
    }

    /// Returns the user config path: `~/.brandclick/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIRNAME).join(USER_CONFIG_FILENAME))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut BrandclickConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::ReadFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            },
        })?;

        let file_config: BrandclickConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only values set in `other` win.
    fn merge(base: &mut BrandclickConfig, other: &BrandclickConfig) {
        if other.variant.is_some() {
            base.variant = other.variant;
        }

        // Coefficients
        let (b, o) = (&mut base.coefficients, &other.coefficients);
        if o.seasonality.is_some() {
            b.seasonality = o.seasonality;
        }
        if o.awareness.is_some() {
            b.awareness = o.awareness;
        }
        if o.branded_search.is_some() {
            b.branded_search = o.branded_search;
        }
        if o.publications.is_some() {
            b.publications = o.publications;
        }
        if o.intercept.is_some() {
            b.intercept = o.intercept;
        }

        // Seasonality table merges per month
        base.seasonality_table.extend(
            other
                .seasonality_table
                .iter()
                .map(|(k, v)| (k.clone(), *v)),
        );

        if other.rounding.policy.is_some() {
            base.rounding.policy = other.rounding.policy;
        }

        if other.secondary.enabled.is_some() {
            base.secondary.enabled = other.secondary.enabled;
        }
        if other.secondary.factor.is_some() {
            base.secondary.factor = other.secondary.factor;
        }

        if other.observability.log_level.is_some() {
            base.observability.log_level = other.observability.log_level.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Values that do not parse are ignored with a warning.
    fn apply_env_overrides(config: &mut BrandclickConfig) {
        if let Ok(val) = std::env::var(ENV_VARIANT) {
            match val.parse::<ModelVariant>() {
                Ok(v) => config.variant = Some(v),
                Err(e) => tracing::warn!(var = ENV_VARIANT, error = %e, "ignoring env override"),
            }
        }
        if let Ok(val) = std::env::var(ENV_ROUNDING) {
            match val.parse::<RoundingPolicy>() {
                Ok(v) => config.rounding.policy = Some(v),
                Err(e) => tracing::warn!(var = ENV_ROUNDING, error = %e, "ignoring env override"),
            }
        }
        if let Ok(val) = std::env::var(ENV_SECONDARY_ENABLED) {
            match val.parse::<bool>() {
                Ok(v) => config.secondary.enabled = Some(v),
                Err(e) => {
                    tracing::warn!(var = ENV_SECONDARY_ENABLED, error = %e, "ignoring env override")
                }
            }
        }
        if let Ok(val) = std::env::var(ENV_SECONDARY_FACTOR) {
            match val.parse::<f64>() {
                Ok(v) => config.secondary.factor = Some(v),
                Err(e) => {
                    tracing::warn!(var = ENV_SECONDARY_FACTOR, error = %e, "ignoring env override")
                }
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut BrandclickConfig, cli: &CliOverrides) {
        if let Some(v) = cli.variant {
            config.variant = Some(v);
        }
        if let Some(v) = cli.rounding {
            config.rounding.policy = Some(v);
        }
        if let Some(v) = cli.secondary_enabled {
            config.secondary.enabled = Some(v);
        }
        if let Some(ref v) = cli.log_level {
            config.observability.log_level = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Month keys in calendar order, unrecognised keys after them.
fn serialize_calendar_order<S: Serializer>(
    table: &BTreeMap<String, u32>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let months = Month::ALL
        .into_iter()
        .filter_map(|m| table.get_key_value(m.name()));
    let others = table.iter().filter(|(k, _)| k.parse::<Month>().is_err());
    serializer.collect_map(months.chain(others))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
