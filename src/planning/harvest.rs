//! Harvest-date projection from per-crop growing periods.

use chrono::{Days, NaiveDate};
use std::collections::BTreeMap;

/// Growing period applied to crop types missing from the table.
pub const DEFAULT_GROWING_PERIOD: u32 = 90;

/// Built-in growing periods, in days from planting to harvest.
pub const CROP_TYPES: &[(&str, u32)] = &[
    ("Corn", 120),
    ("Soybeans", 100),
    ("Wheat", 90),
    ("Cotton", 180),
    ("Rice", 130),
    ("Tomatoes", 85),
    ("Potatoes", 70),
    ("Lettuce", 45),
    ("Carrots", 75),
    ("Onions", 110),
];

/// Lookup table from crop type to growing period.
///
/// Keys are matched exactly. Unknown crop types fall back to
/// [`GrowingPeriods::fallback`] and the fallback is logged, never rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowingPeriods {
    periods: Vec<(String, u32)>,
    fallback: u32,
}

impl GrowingPeriods {
    pub fn new(fallback: u32) -> Self {
        Self {
            periods: CROP_TYPES
                .iter()
                .map(|(name, days)| (name.to_string(), *days))
                .collect(),
            fallback,
        }
    }

    /// Adds crop types or replaces the period of existing ones.
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, u32>) -> Self {
        for (name, days) in overrides {
            match self.periods.iter_mut().find(|(n, _)| n == name) {
                Some(entry) => entry.1 = *days,
                None => self.periods.push((name.clone(), *days)),
            }
        }
        self
    }

    pub fn fallback(&self) -> u32 {
        self.fallback
    }

    pub fn lookup(&self, crop_type: &str) -> Option<u32> {
        self.periods
            .iter()
            .find(|(name, _)| name == crop_type)
            .map(|(_, days)| *days)
    }

    pub fn is_known(&self, crop_type: &str) -> bool {
        self.lookup(crop_type).is_some()
    }

    pub fn period_for(&self, crop_type: &str) -> u32 {
        self.lookup(crop_type).unwrap_or_else(|| {
            tracing::warn!(
                crop_type = %crop_type,
                days = self.fallback,
                "Unknown crop type, using default growing period"
            );
            self.fallback
        })
    }

    /// Planting date plus the crop's growing period.
    pub fn project_harvest(&self, planting_date: NaiveDate, crop_type: &str) -> NaiveDate {
        let days = self.period_for(crop_type);
        planting_date
            .checked_add_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.periods.iter().map(|(name, days)| (name.as_str(), *days))
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}

impl Default for GrowingPeriods {
    fn default() -> Self {
        Self::new(DEFAULT_GROWING_PERIOD)
    }
}

/// Projects a harvest date with the built-in table.
pub fn project_harvest_date(planting_date: NaiveDate, crop_type: &str) -> NaiveDate {
    GrowingPeriods::default().project_harvest(planting_date, crop_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_every_known_crop_adds_its_period() {
        let planting = date(2024, 3, 1);
        for (crop, days) in CROP_TYPES {
            let harvest = project_harvest_date(planting, crop);
            assert_eq!(
                (harvest - planting).num_days(),
                i64::from(*days),
                "crop {}",
                crop
            );
        }
    }

    #[test]
    fn test_corn_example() {
        assert_eq!(project_harvest_date(date(2024, 3, 1), "Corn"), date(2024, 6, 29));
        assert_eq!(project_harvest_date(date(2024, 3, 1), "Lettuce"), date(2024, 4, 15));
    }

    #[test]
    fn test_unknown_crop_uses_ninety_days() {
        assert_eq!(project_harvest_date(date(2024, 1, 1), "Quinoa"), date(2024, 3, 31));
        // keys are exact
        assert_eq!(project_harvest_date(date(2024, 1, 1), "corn"), date(2024, 3, 31));
    }

    #[test]
    fn test_crosses_year_boundary() {
        assert_eq!(project_harvest_date(date(2023, 10, 10), "Wheat"), date(2024, 1, 8));
    }

    #[test]
    fn test_overrides_replace_and_extend() {
        let mut overrides = BTreeMap::new();
        overrides.insert("Corn".to_string(), 110);
        overrides.insert("Sorghum".to_string(), 115);
        let periods = GrowingPeriods::new(60).with_overrides(&overrides);

        assert_eq!(periods.lookup("Corn"), Some(110));
        assert_eq!(periods.lookup("Sorghum"), Some(115));
        assert_eq!(periods.period_for("Quinoa"), 60);
        assert_eq!(periods.len(), CROP_TYPES.len() + 1);
    }
}
