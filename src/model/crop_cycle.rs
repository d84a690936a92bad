use super::types::CropStatus;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Fields a crop cycle may be planted in.
pub const FIELD_LOCATIONS: &[&str] = &[
    "North Field A",
    "North Field B",
    "North Field C",
    "South Field A",
    "South Field B",
    "South Field C",
    "East Field A",
    "East Field B",
    "East Field C",
    "West Field A",
    "West Field B",
    "West Field C",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropCycle {
    #[serde(rename = "Id")]
    pub id: u32,

    /// Key into the growing-period table.
    pub crop_type: String,

    #[serde(default)]
    pub variety: String,

    pub field_location: String,

    pub planting_date: NaiveDate,

    /// Planting date plus the crop's growing period unless overridden.
    pub harvest_date: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_harvest_date: Option<NaiveDate>,

    #[serde(default)]
    pub acreage: f64,

    #[serde(default)]
    pub status: CropStatus,

    #[serde(default)]
    pub notes: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl CropCycle {
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Inclusive interval overlap between `[planting, harvest]` and
    /// `[start, end]`.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        let planted_inside = self.planting_date >= start && self.planting_date <= end;
        let harvested_inside = self.harvest_date >= start && self.harvest_date <= end;
        let spans_range = self.planting_date <= start && self.harvest_date >= end;
        planted_inside || harvested_inside || spans_range
    }

    /// Length of the cycle in days as currently scheduled.
    pub fn season_length(&self) -> i64 {
        (self.harvest_date - self.planting_date).num_days()
    }
}

/// Input for a new crop cycle. Required fields are optional here so that
/// their absence surfaces as a validation error rather than a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewCropCycle {
    pub crop_type: Option<String>,
    pub variety: Option<String>,
    pub field_location: Option<String>,
    pub planting_date: Option<NaiveDate>,
    pub planned_harvest_date: Option<NaiveDate>,
    pub acreage: Option<f64>,
    pub notes: Option<String>,
}

impl NewCropCycle {
    pub fn new(
        crop_type: impl Into<String>,
        field_location: impl Into<String>,
        planting_date: NaiveDate,
    ) -> Self {
        Self {
            crop_type: Some(crop_type.into()),
            field_location: Some(field_location.into()),
            planting_date: Some(planting_date),
            ..Default::default()
        }
    }

    pub fn with_variety(mut self, variety: impl Into<String>) -> Self {
        self.variety = Some(variety.into());
        self
    }

    pub fn with_acreage(mut self, acreage: f64) -> Self {
        self.acreage = Some(acreage);
        self
    }

    pub fn with_planned_harvest_date(mut self, date: NaiveDate) -> Self {
        self.planned_harvest_date = Some(date);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Partial update. Changing `crop_type` or `planting_date` re-projects the
/// harvest date unless `harvest_date` is supplied in the same update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CropCycleUpdate {
    pub crop_type: Option<String>,
    pub variety: Option<String>,
    pub field_location: Option<String>,
    pub planting_date: Option<NaiveDate>,
    pub harvest_date: Option<NaiveDate>,
    pub planned_harvest_date: Option<NaiveDate>,
    pub acreage: Option<f64>,
    pub status: Option<CropStatus>,
    pub notes: Option<String>,
}

impl CropCycleUpdate {
    pub fn with_planting_date(mut self, date: NaiveDate) -> Self {
        self.planting_date = Some(date);
        self
    }

    pub fn with_crop_type(mut self, crop_type: impl Into<String>) -> Self {
        self.crop_type = Some(crop_type.into());
        self
    }

    pub fn with_harvest_date(mut self, date: NaiveDate) -> Self {
        self.harvest_date = Some(date);
        self
    }

    pub fn with_status(mut self, status: CropStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// True when the update moves the cycle to a different crop or planting
    /// date than `current`.
    pub fn changes_schedule(&self, current: &CropCycle) -> bool {
        let new_planting = self
            .planting_date
            .is_some_and(|d| d != current.planting_date);
        let new_crop = self
            .crop_type
            .as_deref()
            .is_some_and(|c| c != current.crop_type);
        new_planting || new_crop
    }
}
