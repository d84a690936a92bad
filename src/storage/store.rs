use super::latency::Latency;
use super::seed::SeedData;
use super::{ActivityRepository, CustomerRepository, OrderRepository, PlanningRepository};
use crate::config::FieldbookConfig;
use crate::error::Result;
use crate::planning::GrowingPeriods;
use std::path::Path;

/// All repositories for one session, loaded from the same seed.
pub struct Store {
    pub customers: CustomerRepository,
    pub orders: OrderRepository,
    pub activities: ActivityRepository,
    pub planning: PlanningRepository,
}

impl Store {
    /// Builds a store from the configured data directory, or from the
    /// embedded sample data when none is configured.
    pub fn open(config: &FieldbookConfig, project_root: Option<&Path>) -> Result<Self> {
        let seed = match config.data_dir(project_root) {
            Some(dir) => SeedData::from_dir(&dir)?,
            None => SeedData::embedded()?,
        };
        Ok(Self::from_seed(
            seed,
            config.planning.growing_periods(),
            Latency::new(config.store.latency),
        ))
    }

    pub fn from_seed(seed: SeedData, periods: GrowingPeriods, latency: Latency) -> Self {
        let SeedData {
            customers,
            orders,
            activities,
            crop_cycles,
            reminders,
        } = seed;
        Self {
            customers: CustomerRepository::new(customers, latency),
            orders: OrderRepository::new(orders, latency),
            activities: ActivityRepository::new(activities, latency),
            planning: PlanningRepository::new(crop_cycles, reminders, periods, latency),
        }
    }

    /// An empty store with default growing periods and no latency.
    pub fn empty() -> Self {
        Self::from_seed(SeedData::empty(), GrowingPeriods::default(), Latency::none())
    }
}
