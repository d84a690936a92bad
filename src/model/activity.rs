use super::types::ActivityType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SYSTEM_USER: &str = "System User";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "Id")]
    pub id: u32,

    pub customer_id: String,

    #[serde(rename = "type")]
    pub activity_type: ActivityType,

    #[serde(default)]
    pub description: String,

    pub date: DateTime<Utc>,

    #[serde(default)]
    pub created_by: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewActivity {
    pub customer_id: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub description: String,
}

impl NewActivity {
    pub fn new(
        customer_id: impl Into<String>,
        activity_type: ActivityType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            activity_type,
            description: description.into(),
        }
    }

    pub fn into_activity(self, id: u32, date: DateTime<Utc>) -> Activity {
        Activity {
            id,
            customer_id: self.customer_id,
            activity_type: self.activity_type,
            description: self.description,
            date,
            created_by: SYSTEM_USER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityUpdate {
    pub customer_id: Option<String>,
    #[serde(rename = "type")]
    pub activity_type: Option<ActivityType>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl ActivityUpdate {
    pub fn apply(self, activity: &mut Activity) {
        if let Some(v) = self.customer_id {
            activity.customer_id = v;
        }
        if let Some(v) = self.activity_type {
            activity.activity_type = v;
        }
        if let Some(v) = self.description {
            activity.description = v;
        }
        if let Some(v) = self.date {
            activity.date = v;
        }
    }
}
