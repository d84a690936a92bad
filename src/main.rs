use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use fieldbook::cli::handlers::{self, CommandContext};
use fieldbook::cli::{Cli, Commands};
use fieldbook::config::FieldbookConfig;
use fieldbook::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    match cli.command {
        Commands::Init { seed, force } => handlers::handle_init(seed, force, cli.data_dir),
        command => {
            let (config, root) = load_config(cli.config.as_deref(), cli.data_dir.as_deref())?;
            let mut ctx = CommandContext::new(config, root, cli.today)?;
            dispatch(&mut ctx, command)
        }
    }
}

fn dispatch(ctx: &mut CommandContext, command: Commands) -> Result<()> {
    match command {
        Commands::Init { seed, force } => handlers::handle_init(seed, force, None),
        Commands::Customers(command) => handlers::handle_customers(ctx, command),
        Commands::Orders(command) => handlers::handle_orders(ctx, command),
        Commands::Activities(command) => handlers::handle_activities(ctx, command),
        Commands::Crops(command) => handlers::handle_crops(ctx, command),
        Commands::HarvestDate {
            crop_type,
            planting_date,
            json,
        } => handlers::handle_harvest_date(ctx, crop_type, planting_date, json),
        Commands::CropTypes { json } => handlers::handle_crop_types(ctx, json),
        Commands::Calendar { month, json } => handlers::handle_calendar(ctx, month, json),
        Commands::Reminders(command) => handlers::handle_reminders(ctx, command),
        Commands::Dashboard { json } => handlers::handle_dashboard(ctx, json),
    }
}

/// Loads the explicit config file, or discovers one upward from the
/// working directory. A `--data-dir` flag overrides the configured one.
fn load_config(
    config_path: Option<&str>,
    data_dir: Option<&str>,
) -> Result<(FieldbookConfig, Option<PathBuf>)> {
    let (mut config, root) = match config_path {
        Some(path) => {
            let (config, root) = FieldbookConfig::from_file(&PathBuf::from(path))
                .with_context(|| format!("Failed to load config from {}", path))?;
            (config, Some(root))
        }
        None => {
            let cwd = std::env::current_dir()?;
            FieldbookConfig::discover(&cwd).context("Failed to load config")?
        }
    };

    if let Some(dir) = data_dir {
        let cwd = std::env::current_dir()?;
        config.store.data_dir = Some(cwd.join(dir).to_string_lossy().into_owned());
    }

    Ok((config, root))
}
