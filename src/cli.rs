//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use crate::adapters::coingecko_adapter::{
    CoinGeckoAdapter, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::asset::{default_assets, parse_assets, Asset};
use crate::domain::config_validation::validate_analysis_config;
use crate::domain::error::CryptolensError;
use crate::domain::pipeline::{analyze_asset, AssetAnalysis, TimeframeStatus};
use crate::domain::timeframe::{default_timeframes, parse_timeframes, Timeframe};
use crate::ports::config_port::ConfigPort;
use crate::ports::market_data_port::MarketDataPort;

#[derive(Parser, Debug)]
#[command(name = "cryptolens", about = "Crypto market-condition analyzer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze configured assets across all timeframes
    Analyze {
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Analyze a single asset id instead of the configured set
        #[arg(long)]
        asset: Option<String>,
        /// Read price series from CSV files instead of the API
        #[arg(long)]
        csv_dir: Option<PathBuf>,
    },
    /// List the configured assets
    ListAssets {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Analyze {
            config,
            asset,
            csv_dir,
        } => run_analyze(config.as_ref(), asset.as_deref(), csv_dir),
        Command::ListAssets { config } => run_list_assets(config.as_ref()),
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = CryptolensError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

fn run_analyze(
    config_path: Option<&PathBuf>,
    asset_override: Option<&str>,
    csv_dir: Option<PathBuf>,
) -> ExitCode {
    let config = match config_path {
        Some(path) => {
            eprintln!("Loading config from {}", path.display());
            match load_config(path) {
                Ok(adapter) => Some(adapter),
                Err(code) => return code,
            }
        }
        None => None,
    };

    if let Some(ref adapter) = config {
        if let Err(e) = validate_analysis_config(adapter) {
            eprintln!("error: {e}");
            return (&e).into();
        }
    }

    let assets = match resolve_assets(config.as_ref(), asset_override) {
        Ok(assets) => assets,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let timeframes = match resolve_timeframes(config.as_ref()) {
        Ok(timeframes) => timeframes,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let port: Box<dyn MarketDataPort> = match csv_dir {
        Some(dir) => {
            eprintln!("Reading price series from {}", dir.display());
            Box::new(CsvAdapter::new(dir))
        }
        None => {
            let adapter = match config.as_ref() {
                Some(c) => CoinGeckoAdapter::from_config(c),
                None => CoinGeckoAdapter::new(
                    DEFAULT_BASE_URL,
                    DEFAULT_USER_AGENT,
                    Duration::from_secs(DEFAULT_TIMEOUT_SECS),
                ),
            };
            match adapter {
                Ok(a) => Box::new(a),
                Err(e) => {
                    eprintln!("error: {e}");
                    return (&e).into();
                }
            }
        }
    };

    eprintln!(
        "Analyzing {} assets across {} timeframes...",
        assets.len(),
        timeframes.len()
    );

    let mut first_failure: Option<ExitCode> = None;
    for asset in &assets {
        match analyze_asset(port.as_ref(), asset, &timeframes) {
            Ok(analysis) => print_analysis(&analysis),
            Err(e) => {
                eprintln!("error: {e}");
                first_failure.get_or_insert((&e).into());
            }
        }
    }

    first_failure.unwrap_or(ExitCode::SUCCESS)
}

fn print_analysis(analysis: &AssetAnalysis) {
    println!("=== {}/USD ===", analysis.asset.symbol);

    for outcome in &analysis.outcomes {
        match &outcome.status {
            TimeframeStatus::Analyzed(result) => {
                println!("  {:<8} {}", result.timeframe_label, result.summary);
            }
            TimeframeStatus::InsufficientHistory { points, minimum } => {
                println!(
                    "  {:<8} unavailable: {} of {} required points",
                    outcome.timeframe.label, points, minimum
                );
            }
        }
    }

    match analysis.interpretation {
        Some(text) => println!("  Analysis: {text}"),
        None => println!("  Analysis: unavailable (daily timeframe has no result)"),
    }
    println!();
}

fn run_list_assets(config_path: Option<&PathBuf>) -> ExitCode {
    let config = match config_path {
        Some(path) => match load_config(path) {
            Ok(adapter) => Some(adapter),
            Err(code) => return code,
        },
        None => None,
    };

    let assets = match resolve_assets(config.as_ref(), None) {
        Ok(assets) => assets,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    for asset in &assets {
        println!("{:<8} {}", asset.symbol, asset.id);
    }
    eprintln!("{} assets configured", assets.len());
    ExitCode::SUCCESS
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let config = match load_config(config_path) {
        Ok(adapter) => adapter,
        Err(code) => return code,
    };

    if let Err(e) = validate_analysis_config(&config) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let assets = match resolve_assets(Some(&config), None) {
        Ok(assets) => assets,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let timeframes = match resolve_timeframes(Some(&config)) {
        Ok(timeframes) => timeframes,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    eprintln!("\nAssets:");
    for asset in &assets {
        eprintln!("  {:<8} {}", asset.symbol, asset.id);
    }

    eprintln!("\nTimeframes:");
    for tf in &timeframes {
        eprintln!("  {:<8} {} days, {}", tf.label, tf.days, tf.interval);
    }

    eprintln!("\nConfiguration is valid.");
    ExitCode::SUCCESS
}

pub fn resolve_assets(
    config: Option<&FileConfigAdapter>,
    asset_override: Option<&str>,
) -> Result<Vec<Asset>, CryptolensError> {
    let configured = match config.and_then(|c| c.get_string("assets", "ids")) {
        Some(ids) => parse_assets(&ids)?,
        None => default_assets(),
    };

    match asset_override {
        Some(id) => {
            let id_lower = id.to_lowercase();
            Ok(vec![
                configured
                    .into_iter()
                    .find(|a| a.id == id_lower)
                    .unwrap_or_else(|| Asset::new(&id_lower, &id_lower)),
            ])
        }
        None => Ok(configured),
    }
}

pub fn resolve_timeframes(
    config: Option<&FileConfigAdapter>,
) -> Result<Vec<Timeframe>, CryptolensError> {
    match config.and_then(|c| c.get_string("timeframes", "specs")) {
        Some(specs) => parse_timeframes(&specs),
        None => Ok(default_timeframes()),
    }
}
