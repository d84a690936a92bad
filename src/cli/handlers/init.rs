use crate::config::{CONFIG_FILE, FieldbookConfig};
use crate::storage::SeedData;
use anyhow::Result;
use colored::Colorize;

/// Directory `init --seed` copies the sample data into.
const SEED_DIR: &str = "data";

pub fn handle_init(seed: bool, force: bool, data_dir: Option<String>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE);

    if config_path.exists() && !force {
        anyhow::bail!("Project already initialized at {}", config_path.display());
    }

    let mut config = FieldbookConfig::default();
    config.store.data_dir = data_dir.or_else(|| seed.then(|| SEED_DIR.to_string()));

    config.save(&config_path)?;
    println!(
        "{} fieldbook project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config: {}", config_path.display());

    if let Some(dir) = config.data_dir(Some(&cwd)) {
        if seed {
            let written = SeedData::write_embedded(&dir)?;
            tracing::info!(dir = %dir.display(), files = written.len(), "Wrote seed data");
        }
        println!("  Data:   {}", dir.display());
    } else {
        println!("  Data:   {}", "built-in sample data".dimmed());
    }

    Ok(())
}
