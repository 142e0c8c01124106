mod commands;
mod parse;
mod prompt;
mod render;
mod utils;

use anyhow::Result;
use apptkit_core::bridge::Bridge;
use apptkit_core::config::ApptConfig;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "apptkit")]
#[command(about = "Add appointments to your device calendars, with duplicate detection")]
struct Cli {
    /// Use this bridge instead of the configured one
    #[arg(long, global = true)]
    bridge: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an appointment
    Add(commands::add::AddArgs),

    /// List the device's calendars
    Calendars,

    /// Request calendar access from the device
    Access,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ApptConfig::load()?;
    let bridge = resolve_bridge(cli.bridge.as_deref(), &config)?;

    match cli.command {
        Commands::Add(args) => commands::add::run(&bridge, &config, args).await,
        Commands::Calendars => commands::calendars::run(&bridge).await,
        Commands::Access => commands::access::run(&bridge).await,
    }
}

fn resolve_bridge(flag: Option<&str>, config: &ApptConfig) -> Result<Bridge> {
    match flag {
        Some(name) => Ok(Bridge::from_name(name)),
        None => Ok(config.bridge()?),
    }
}
