//! techdeck - Entry Point

use clap::Parser;
use std::path::PathBuf;
use techdeck::model::AppError;
use techdeck::source::ItemSource;
use tracing::info;

/// techdeck - auto-advancing technology carousel for the terminal
#[derive(Parser, Debug)]
#[command(name = "techdeck")]
#[command(version)]
#[command(about = "Responsive, auto-advancing technology carousel for the terminal")]
pub struct Args {
    /// Item list file (JSON array or TOML [[items]]); built-in catalogue if omitted
    #[arg(short, long)]
    pub items: Option<PathBuf>,

    /// Autoplay interval in milliseconds (must be positive)
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,

    /// Start with autoplay paused
    #[arg(short, long)]
    pub paused: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let (config, ignored_env) = {
        let config_file = techdeck::config::load_config_with_precedence(args.config.clone())
            .map_err(AppError::from)?;
        let merged = techdeck::config::merge_config(config_file);
        let (with_env, ignored) = techdeck::config::apply_env_overrides(merged);

        // --paused only overrides when explicitly set
        let paused_override = if args.paused { Some(true) } else { None };
        let config = techdeck::config::apply_cli_overrides(
            with_env,
            args.items.clone(),
            args.interval,
            paused_override,
        );
        (config, ignored)
    };
    config.validate().map_err(AppError::from)?;

    techdeck::logging::init(&config.log_file_path).map_err(AppError::from)?;
    techdeck::config::warn_ignored_env(&ignored_env);

    info!(config = ?config, "Configuration loaded and resolved");

    // Load before entering the alternate screen so failures print normally
    let item_source = ItemSource::from_path(config.items_file.clone());
    let items = item_source.load().map_err(AppError::from)?;
    info!(count = items.len(), source = ?item_source, "items loaded");

    techdeck::view::run_app(items, item_source, &config).map_err(AppError::from)?;

    Ok(())
}
