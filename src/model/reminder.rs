use super::types::{ReminderPriority, ReminderType};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    #[serde(rename = "Id")]
    pub id: u32,

    pub title: String,

    #[serde(default)]
    pub description: String,

    pub reminder_date: NaiveDate,

    #[serde(default)]
    pub reminder_type: ReminderType,

    #[serde(default)]
    pub priority: ReminderPriority,

    /// Back-reference only; the crop cycle owns nothing here, but deleting it
    /// removes the reminder.
    #[serde(default)]
    pub crop_cycle_id: Option<u32>,

    #[serde(default)]
    pub completed: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Reminder {
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn mark_completed(&mut self) {
        let now = Utc::now();
        self.completed = true;
        self.completed_at = Some(now);
        self.updated_at = now;
    }

    pub fn belongs_to(&self, crop_cycle_id: u32) -> bool {
        self.crop_cycle_id == Some(crop_cycle_id)
    }

    /// Open and dated within `[from, until]`.
    pub fn is_due_between(&self, from: NaiveDate, until: NaiveDate) -> bool {
        !self.completed && self.reminder_date >= from && self.reminder_date <= until
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewReminder {
    pub title: Option<String>,
    pub description: Option<String>,
    pub reminder_date: Option<NaiveDate>,
    pub reminder_type: Option<ReminderType>,
    pub priority: Option<ReminderPriority>,
    pub crop_cycle_id: Option<u32>,
}

impl NewReminder {
    pub fn new(title: impl Into<String>, reminder_date: NaiveDate) -> Self {
        Self {
            title: Some(title.into()),
            reminder_date: Some(reminder_date),
            ..Default::default()
        }
    }

    pub fn with_type(mut self, reminder_type: ReminderType) -> Self {
        self.reminder_type = Some(reminder_type);
        self
    }

    pub fn with_priority(mut self, priority: ReminderPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_crop_cycle(mut self, crop_cycle_id: u32) -> Self {
        self.crop_cycle_id = Some(crop_cycle_id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReminderUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub reminder_date: Option<NaiveDate>,
    pub reminder_type: Option<ReminderType>,
    pub priority: Option<ReminderPriority>,
    /// `None` leaves the link alone; `Some(None)` (JSON `null`) unlinks.
    #[serde(
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub crop_cycle_id: Option<Option<u32>>,
    pub completed: Option<bool>,
}

/// Maps a present field to `Some`, keeping an explicit `null` apart from an
/// absent key.
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl ReminderUpdate {
    pub fn with_crop_cycle(mut self, crop_cycle_id: u32) -> Self {
        self.crop_cycle_id = Some(Some(crop_cycle_id));
        self
    }

    pub fn clear_crop_cycle(mut self) -> Self {
        self.crop_cycle_id = Some(None);
        self
    }

    pub fn apply(self, reminder: &mut Reminder) {
        if let Some(v) = self.title {
            reminder.title = v;
        }
        if let Some(v) = self.description {
            reminder.description = v;
        }
        if let Some(v) = self.reminder_date {
            reminder.reminder_date = v;
        }
        if let Some(v) = self.reminder_type {
            reminder.reminder_type = v;
        }
        if let Some(v) = self.priority {
            reminder.priority = v;
        }
        if let Some(v) = self.crop_cycle_id {
            reminder.crop_cycle_id = v;
        }
        match self.completed {
            Some(true) if !reminder.completed => reminder.mark_completed(),
            Some(false) => {
                reminder.completed = false;
                reminder.completed_at = None;
            }
            _ => {}
        }
        reminder.touch();
    }
}
