mod activities;
mod calendar;
mod crops;
mod customers;
mod dashboard;
mod init;
mod orders;
mod reminders;
mod utils;

pub use activities::handle_activities;
pub use calendar::{handle_calendar, handle_crop_types, handle_harvest_date};
pub use crops::handle_crops;
pub use customers::handle_customers;
pub use dashboard::handle_dashboard;
pub use init::handle_init;
pub use orders::handle_orders;
pub use reminders::handle_reminders;

use crate::config::FieldbookConfig;
use crate::storage::Store;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: FieldbookConfig,
    /// Directory holding the config file, when one was found.
    pub root: Option<PathBuf>,
    pub store: Store,
    pub today: NaiveDate,
}

impl CommandContext {
    pub fn new(config: FieldbookConfig, root: Option<PathBuf>, today: Option<NaiveDate>) -> Result<Self> {
        let store = Store::open(&config, root.as_deref()).context("Failed to load data")?;
        Ok(Self {
            config,
            root,
            store,
            today: today.unwrap_or_else(|| Local::now().date_naive()),
        })
    }
}
