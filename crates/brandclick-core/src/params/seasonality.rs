//! Month → seasonality index lookup.

use std::collections::BTreeMap;

use crate::constants::UQ2019_SEASONALITY;
use crate::errors::{ConfigError, PredictionError};
use crate::types::Month;

/// Fixed per-month demand index, one positive entry for every month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonalityTable {
    indices: [u32; 12],
}

impl Default for SeasonalityTable {
    fn default() -> Self {
        Self::uq2019()
    }
}

impl SeasonalityTable {
    /// Prior-year observed table.
    pub fn uq2019() -> Self {
        Self {
            indices: UQ2019_SEASONALITY,
        }
    }

    /// Build from indices in calendar order. Every index must be positive.
    pub fn from_indices(indices: [u32; 12]) -> Result<Self, ConfigError> {
        if let Some(month) = Month::ALL.into_iter().find(|m| indices[m.ordinal()] == 0) {
            return Err(ConfigError::ValidationFailed {
                field: format!("seasonality_table.{month}"),
                message: "index must be a positive integer".to_string(),
            });
        }
        Ok(Self { indices })
    }

    pub fn lookup(&self, month: Month) -> u32 {
        self.indices[month.ordinal()]
    }

    /// Look up by literal month name; anything outside the twelve names fails.
    pub fn lookup_name(&self, name: &str) -> Result<u32, PredictionError> {
        let month: Month = name.parse()?;
        Ok(self.lookup(month))
    }

    /// Copy of this table with the given entries replaced.
    ///
    /// Keys are month names; unknown names and zero indices are rejected.
    pub fn with_overrides(&self, overrides: &BTreeMap<String, u32>) -> Result<Self, ConfigError> {
        let mut indices = self.indices;
        for (name, &index) in overrides {
            let month: Month = name.parse().map_err(|_| ConfigError::InvalidValue {
                field: format!("seasonality_table.{name}"),
                message: "not a month name (expected January..December)".to_string(),
            })?;
            indices[month.ordinal()] = index;
        }
        Self::from_indices(indices)
    }

    /// `(month, index)` pairs in calendar order.
    pub fn entries(&self) -> impl Iterator<Item = (Month, u32)> + '_ {
        Month::ALL.into_iter().map(|m| (m, self.lookup(m)))
    }

    pub fn to_map(&self) -> BTreeMap<String, u32> {
        self.entries()
            .map(|(m, i)| (m.name().to_string(), i))
            .collect()
    }
}
