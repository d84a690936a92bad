use super::latency::{Latency, Operation};
use super::table::{Placement, Record, Table};
use crate::{
    error::{FieldbookError, Result},
    model::{Activity, ActivityType, ActivityUpdate, NewActivity},
    validation,
};
use chrono::{DateTime, Utc};

/// Default size of the recent-activity feed.
pub const DEFAULT_RECENT_LIMIT: usize = 10;

impl Record for Activity {
    const KIND: &'static str = "Activity";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

pub struct ActivityRepository {
    table: Table<Activity>,
    latency: Latency,
}

impl ActivityRepository {
    pub fn new(activities: Vec<Activity>, latency: Latency) -> Self {
        Self {
            table: Table::new(activities),
            latency,
        }
    }

    fn newest_first(mut activities: Vec<Activity>) -> Vec<Activity> {
        activities.sort_by(|a, b| b.date.cmp(&a.date));
        activities
    }

    /// All activities, newest first.
    pub fn list(&self) -> Vec<Activity> {
        self.latency.pause(Operation::List);
        Self::newest_first(self.table.rows().to_vec())
    }

    pub fn get(&self, id: u32) -> Result<Activity> {
        self.latency.pause(Operation::Read);
        self.table.get(id).cloned()
    }

    pub fn for_customer(&self, customer_id: u32) -> Vec<Activity> {
        self.latency.pause(Operation::List);
        let key = customer_id.to_string();
        Self::newest_first(self.table.filter(|a| a.customer_id == key))
    }

    pub fn of_type(&self, activity_type: ActivityType) -> Vec<Activity> {
        self.latency.pause(Operation::List);
        Self::newest_first(self.table.filter(|a| a.activity_type == activity_type))
    }

    pub fn recent(&self, limit: usize) -> Vec<Activity> {
        let mut activities = self.list();
        activities.truncate(limit);
        activities
    }

    pub fn create(&mut self, input: NewActivity) -> Result<Activity> {
        self.create_at(input, Utc::now())
    }

    /// Logs an activity stamped with `at`, attributed to the system user.
    pub fn create_at(&mut self, input: NewActivity, at: DateTime<Utc>) -> Result<Activity> {
        self.latency.pause(Operation::Write);
        if input.customer_id.trim().is_empty() {
            return Err(FieldbookError::Validation(
                "Activity requires a customer".to_string(),
            ));
        }
        validation::validate_text("Description", &input.description)?;

        let activity = self.table.insert(input.into_activity(0, at), Placement::Back)?;
        tracing::info!(
            id = activity.id,
            customer_id = %activity.customer_id,
            kind = %activity.activity_type,
            "Logged activity"
        );
        Ok(activity)
    }

    pub fn update(&mut self, id: u32, update: ActivityUpdate) -> Result<Activity> {
        self.latency.pause(Operation::Write);
        if let Some(description) = &update.description {
            validation::validate_text("Description", description)?;
        }
        let activity = self.table.get_mut(id)?;
        update.apply(activity);
        tracing::info!(id, "Updated activity");
        Ok(activity.clone())
    }

    pub fn delete(&mut self, id: u32) -> Result<Activity> {
        self.latency.pause(Operation::Write);
        let removed = self.table.remove(id)?;
        tracing::info!(id, "Deleted activity");
        Ok(removed)
    }
}
