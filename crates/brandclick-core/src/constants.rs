/// Conversion factor from brand keyword clicks to the GA unit.
pub const DEFAULT_SECONDARY_FACTOR: f64 = 0.0221;

/// Seasonality index per calendar month, January first (UQ2019).
pub const UQ2019_SEASONALITY: [u32; 12] = [109, 114, 169, 100, 88, 69, 72, 77, 102, 76, 85, 96];

// --- Baseline variant (no rounding, no GA) ---
pub const BASELINE_SEASONALITY_WEIGHT: f64 = 3336.0;
pub const BASELINE_AWARENESS_WEIGHT: f64 = 0.000451762526;
pub const BASELINE_BRANDED_SEARCH_WEIGHT: f64 = 0.00359574998;
pub const BASELINE_PUBLICATIONS_WEIGHT: f64 = 52.1965121;
pub const BASELINE_INTERCEPT: f64 = -104174.0;

// --- Extended variant (per-stage rounding, GA enabled) ---
pub const EXTENDED_SEASONALITY_WEIGHT: f64 = 2710.0;
pub const EXTENDED_AWARENESS_WEIGHT: f64 = 0.0001229;
pub const EXTENDED_BRANDED_SEARCH_WEIGHT: f64 = 0.00244;
pub const EXTENDED_PUBLICATIONS_WEIGHT: f64 = 33.85;
pub const EXTENDED_INTERCEPT: f64 = 37556.0;

// --- Config resolution ---
pub const PROJECT_CONFIG_FILENAME: &str = "brandclick.toml";
pub const USER_CONFIG_DIRNAME: &str = ".brandclick";
pub const USER_CONFIG_FILENAME: &str = "config.toml";
pub const DEFAULT_LOG_LEVEL: &str = "info";

// --- Environment variables ---
pub const ENV_LOG: &str = "BRANDCLICK_LOG";
pub const ENV_VARIANT: &str = "BRANDCLICK_VARIANT";
pub const ENV_ROUNDING: &str = "BRANDCLICK_ROUNDING";
pub const ENV_SECONDARY_ENABLED: &str = "BRANDCLICK_SECONDARY_ENABLED";
pub const ENV_SECONDARY_FACTOR: &str = "BRANDCLICK_SECONDARY_FACTOR";

// --- CSV export ---
pub const CSV_HEADER_FACTOR: &str = "要因";
pub const CSV_HEADER_CONTRIBUTION: &str = "寄与値";
pub const CSV_HEADER_SECONDARY: &str = "GA寄与値";
