use crate::error::{FieldbookError, Result};
use crate::model::{Activity, CropCycle, Customer, Order, Reminder};
use serde::de::DeserializeOwned;
use std::path::Path;

pub const CUSTOMERS_FILE: &str = "customers.json";
pub const ORDERS_FILE: &str = "orders.json";
pub const ACTIVITIES_FILE: &str = "activities.json";
pub const CROP_CYCLES_FILE: &str = "cropCycles.json";
pub const REMINDERS_FILE: &str = "reminders.json";

/// Every seed file, in load order.
pub const SEED_FILES: &[&str] = &[
    CUSTOMERS_FILE,
    ORDERS_FILE,
    ACTIVITIES_FILE,
    CROP_CYCLES_FILE,
    REMINDERS_FILE,
];

const EMBEDDED_CUSTOMERS: &str = include_str!("../../data/customers.json");
const EMBEDDED_ORDERS: &str = include_str!("../../data/orders.json");
const EMBEDDED_ACTIVITIES: &str = include_str!("../../data/activities.json");
const EMBEDDED_CROP_CYCLES: &str = include_str!("../../data/cropCycles.json");
const EMBEDDED_REMINDERS: &str = include_str!("../../data/reminders.json");

/// The five record collections a store starts from.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub customers: Vec<Customer>,
    pub orders: Vec<Order>,
    pub activities: Vec<Activity>,
    pub crop_cycles: Vec<CropCycle>,
    pub reminders: Vec<Reminder>,
}

fn parse<T: DeserializeOwned>(file: &str, content: &str) -> Result<Vec<T>> {
    serde_json::from_str(content).map_err(|source| FieldbookError::Seed {
        file: file.to_string(),
        source,
    })
}

/// Reads `file` from `dir`. A missing file yields an empty collection.
fn read<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Vec<T>> {
    let path = dir.join(file);
    if !path.exists() {
        tracing::warn!(path = %path.display(), "Seed file missing, starting empty");
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(&path)?;
    parse(file, &content)
}

/// Returns the embedded JSON text for a seed file name.
pub fn embedded_content(file: &str) -> Option<&'static str> {
    match file {
        CUSTOMERS_FILE => Some(EMBEDDED_CUSTOMERS),
        ORDERS_FILE => Some(EMBEDDED_ORDERS),
        ACTIVITIES_FILE => Some(EMBEDDED_ACTIVITIES),
        CROP_CYCLES_FILE => Some(EMBEDDED_CROP_CYCLES),
        REMINDERS_FILE => Some(EMBEDDED_REMINDERS),
        _ => None,
    }
}

impl SeedData {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The sample data compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Ok(Self {
            customers: parse(CUSTOMERS_FILE, EMBEDDED_CUSTOMERS)?,
            orders: parse(ORDERS_FILE, EMBEDDED_ORDERS)?,
            activities: parse(ACTIVITIES_FILE, EMBEDDED_ACTIVITIES)?,
            crop_cycles: parse(CROP_CYCLES_FILE, EMBEDDED_CROP_CYCLES)?,
            reminders: parse(REMINDERS_FILE, EMBEDDED_REMINDERS)?,
        })
    }

    pub fn from_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(FieldbookError::Config(format!(
                "Data directory not found: {}",
                dir.display()
            )));
        }
        let seed = Self {
            customers: read(dir, CUSTOMERS_FILE)?,
            orders: read(dir, ORDERS_FILE)?,
            activities: read(dir, ACTIVITIES_FILE)?,
            crop_cycles: read(dir, CROP_CYCLES_FILE)?,
            reminders: read(dir, REMINDERS_FILE)?,
        };
        tracing::debug!(
            dir = %dir.display(),
            customers = seed.customers.len(),
            crop_cycles = seed.crop_cycles.len(),
            reminders = seed.reminders.len(),
            "Loaded seed data"
        );
        Ok(seed)
    }

    /// Copies the embedded seed files into `dir`, leaving existing files
    /// alone. Returns the names of the files written.
    pub fn write_embedded(dir: &Path) -> Result<Vec<&'static str>> {
        std::fs::create_dir_all(dir)?;
        let mut written = Vec::new();
        for &file in SEED_FILES {
            let path = dir.join(file);
            if path.exists() {
                continue;
            }
            if let Some(content) = embedded_content(file) {
                std::fs::write(&path, content)?;
                written.push(file);
            }
        }
        Ok(written)
    }
}
