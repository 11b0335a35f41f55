use std::path::PathBuf;

use brandclick_core::config::CliOverrides;
use brandclick_core::params::{ModelVariant, RoundingPolicy};
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "brandclick")]
#[command(version, about = "Brand keyword click prediction simulator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (replaces ./brandclick.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Model variant preset
    #[arg(long, global = true, value_enum)]
    pub variant: Option<VariantArg>,

    /// Rounding policy
    #[arg(long, global = true, value_enum)]
    pub rounding: Option<RoundingArg>,

    /// Disable the GA figures
    #[arg(long, global = true)]
    pub no_secondary: bool,

    /// Log level when BRANDCLICK_LOG is unset
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict brand keyword clicks and show the contribution breakdown
    Predict(PredictArgs),

    /// List the seasonality index for each month
    Months,

    /// Print the resolved configuration as TOML
    Config,
}

#[derive(Args)]
pub struct PredictArgs {
    /// Target month (January..December)
    #[arg(short, long, default_value = "January")]
    pub month: String,

    /// Awareness spend (JPY)
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub awareness: f64,

    /// Branded-search spend (JPY)
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub branded_search: f64,

    /// Number of published articles
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub publications: f64,

    /// Also write the breakdown as CSV to this path
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Print the full outcome as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum VariantArg {
    Baseline,
    Extended,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RoundingArg {
    None,
    PerStage,
}

impl From<VariantArg> for ModelVariant {
    fn from(v: VariantArg) -> Self {
        match v {
            VariantArg::Baseline => ModelVariant::Baseline,
            VariantArg::Extended => ModelVariant::Extended,
        }
    }
}

impl From<RoundingArg> for RoundingPolicy {
    fn from(r: RoundingArg) -> Self {
        match r {
            RoundingArg::None => RoundingPolicy::Unrounded,
            RoundingArg::PerStage => RoundingPolicy::PerStage,
        }
    }
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            config_path: self.config.clone(),
            variant: self.variant.map(Into::into),
            rounding: self.rounding.map(Into::into),
            secondary_enabled: self.no_secondary.then_some(false),
            log_level: self.log_level.clone(),
        }
    }
}
