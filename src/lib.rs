//! Venue Intel library root.
//! Exposes the CLI parser, the high-level run() function and the
//! loader / filter / aggregator modules behind it.

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`).
pub const LOG_ENV: &str = "VENUEINTEL_LOG";

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Info => cli::commands::info::handle(cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Overview { .. } => cli::commands::overview::handle(&cli.command, cfg),
        Commands::Trends { .. } => cli::commands::trends::handle(&cli.command, cfg),
        Commands::Regions { .. } => cli::commands::regions::handle(&cli.command, cfg),
        Commands::Sponsors { .. } => cli::commands::sponsors::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Diagnostics go to stderr so tables on stdout stay clean.
/// `--verbose` wins over the environment.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("venue_intel=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // configuration is read once; `init` writes its own
    let mut cfg = match &cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load_from(&cli.config_path())?,
    };

    if let Some(dir) = &cli.data {
        cfg.data_dir = dir.clone();
    }

    dispatch(&cli, &cfg)
}
