//! # brandclick
//!
//! Command-line front end: collects the four inputs, resolves configuration,
//! runs one prediction per invocation and renders the breakdown.

mod args;
mod render;

use std::process::ExitCode;

use brandclick_core::config::BrandclickConfig;
use brandclick_core::constants::DEFAULT_LOG_LEVEL;
use brandclick_core::errors::{BrandclickErrorCode, BrandclickResult, ExportError};
use brandclick_core::traits::IPredictor;
use brandclick_core::types::PredictionRequest;
use brandclick_prediction::{write_csv_file, PredictionEngine};
use clap::Parser;

use args::{Cli, Commands, PredictArgs};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e.coded_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> BrandclickResult<()> {
    let overrides = cli.overrides();
    // Up before loading so warnings about ignored layers reach stderr.
    brandclick_core::tracing::init_tracing(
        overrides.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL),
    );
    let root = std::env::current_dir().unwrap_or_else(|_| ".".into());
    let config = BrandclickConfig::load(&root, Some(&overrides))?;
    brandclick_core::tracing::set_log_level(config.observability.effective_log_level());
    tracing::debug!(
        variant = %config.variant.unwrap_or_default(),
        root = %root.display(),
        "configuration resolved"
    );

    match cli.command {
        Commands::Predict(args) => run_predict(&config, &args),
        Commands::Months => {
            let params = config.parameters()?;
            print!("{}", render::render_months(&params.seasonality));
            Ok(())
        }
        Commands::Config => {
            print!("{}", config.resolved()?.to_toml()?);
            Ok(())
        }
    }
}

fn run_predict(config: &BrandclickConfig, args: &PredictArgs) -> BrandclickResult<()> {
    let engine = PredictionEngine::from_config(config)?;
    let request = PredictionRequest {
        month: args.month.clone(),
        awareness_spend: args.awareness,
        branded_search_spend: args.branded_search,
        publication_count: args.publications,
    };
    let outcome = engine.compute_on_demand(&request)?;

    if args.json {
        let json = serde_json::to_string_pretty(&outcome).map_err(|e| ExportError::Json {
            message: e.to_string(),
        })?;
        println!("{json}");
    } else {
        print!("{}", render::render_outcome(&outcome));
    }

    if let Some(path) = &args.csv {
        write_csv_file(&outcome, path)?;
    }
    Ok(())
}
