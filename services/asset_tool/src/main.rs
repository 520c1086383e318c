//! bcx-asset - asset id and exponential parameter tool
//!
//! Usage:
//!   bcx-asset encode BTC
//!   bcx-asset decode 0x40000a83
//!   bcx-asset convert 169 8 4
//!   bcx-asset --json amount 0.0001 8

use anyhow::{Context, Result};
use asset_tool::commands;
use bcx_config::ToolConfig;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(name = "bcx-asset")]
#[command(about = "B&C Exchange asset id and exponential parameter tool")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Environment overlay (e.g. testnet)
    #[arg(short, long)]
    environment: Option<String>,

    /// Log level (trace, debug, info, warn, error); overrides config
    #[arg(short, long)]
    log_level: Option<String>,

    /// Emit JSON; overrides config
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode a symbol (BTC, ABC09, ID0000000123)
    Encode { symbol: String },
    /// Decode an id given as 0x-hex or decimal
    Decode { id: String },
    /// Exit non-zero unless the id is a canonical encoding
    Validate { id: String },
    /// Exponential parameter for a quantity in smallest units
    Param { quantity: i64 },
    /// Re-scale a parameter between unit exponents
    Convert { param: u8, from_exp: u8, to_exp: u8 },
    /// Exponential parameter for a decimal amount
    Amount {
        amount: String,
        /// Defaults to the configured unit exponent
        unit_exponent: Option<u8>,
    },
    /// Known and configured assets
    List,
    /// Print the exponential series
    Series,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ToolConfig::load(args.config.as_deref(), args.environment.as_deref())
        .context("Failed to load configuration")?;
    if let Some(level) = &args.log_level {
        config.log_level = level.clone();
        config.validate()?;
    }
    config.json_output |= args.json;

    init_logging(&config);
    debug!(?args, "parsed arguments");

    match args.command {
        Command::Encode { symbol } => emit(&config, &commands::encode(&symbol)),
        Command::Decode { id } => {
            let id = commands::parse_asset_id_arg(&id)?;
            emit(&config, &commands::decode(id, &config))
        }
        Command::Validate { id } => {
            let id = commands::parse_asset_id_arg(&id)?;
            let report = commands::decode(id, &config);
            emit(&config, &report)?;
            if !report.valid {
                info!(id = report.id, "asset id is not canonical");
                std::process::exit(1);
            }
            Ok(())
        }
        Command::Param { quantity } => emit(&config, &commands::param(quantity)?),
        Command::Convert {
            param,
            from_exp,
            to_exp,
        } => emit(&config, &commands::convert(param, from_exp, to_exp)?),
        Command::Amount {
            amount,
            unit_exponent,
        } => {
            let amount = Decimal::from_str(&amount)
                .with_context(|| format!("Invalid decimal amount '{}'", amount))?;
            let exp = unit_exponent.unwrap_or(config.default_unit_exponent);
            emit(&config, &commands::amount(amount, exp)?)
        }
        Command::List => emit_all(&config, &commands::list(&config)?),
        Command::Series => {
            let series = commands::series();
            if config.json_output {
                println!("{}", serde_json::to_string_pretty(&series)?);
            } else {
                for (index, value) in series {
                    println!("{:>3} {}", index, value);
                }
            }
            Ok(())
        }
    }
}

fn init_logging(config: &ToolConfig) {
    // Logs go to stderr so stdout stays machine readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.to_lowercase().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn emit<T: Serialize + Display>(config: &ToolConfig, report: &T) -> Result<()> {
    if config.json_output {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

fn emit_all<T: Serialize + Display>(config: &ToolConfig, rows: &[T]) -> Result<()> {
    if config.json_output {
        println!("{}", serde_json::to_string_pretty(rows)?);
    } else {
        for row in rows {
            println!("{}", row);
        }
    }
    Ok(())
}
