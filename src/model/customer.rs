use super::types::CustomerStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "Id")]
    pub id: u32,

    pub name: String,

    #[serde(default)]
    pub farm_name: String,

    #[serde(default)]
    pub contact_email: String,

    #[serde(default)]
    pub contact_phone: String,

    #[serde(default)]
    pub location: Location,

    /// Acres under cultivation.
    #[serde(default)]
    pub farm_size: f64,

    #[serde(default)]
    pub primary_crops: Vec<String>,

    pub customer_since: NaiveDate,

    #[serde(default)]
    pub status: CustomerStatus,

    #[serde(default)]
    pub notes: String,
}

impl Customer {
    pub fn is_active(&self) -> bool {
        self.status == CustomerStatus::Active
    }

    /// Case-insensitive substring match over the searchable fields.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.farm_name.to_lowercase().contains(needle)
            || self.contact_email.to_lowercase().contains(needle)
            || self.location.city.to_lowercase().contains(needle)
            || self
                .primary_crops
                .iter()
                .any(|crop| crop.to_lowercase().contains(needle))
    }
}

/// Fields accepted when registering a customer. Id, `customer_since` and
/// status are assigned by the repository.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewCustomer {
    pub name: String,
    pub farm_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub location: Location,
    pub farm_size: f64,
    pub primary_crops: Vec<String>,
    pub notes: String,
}

impl NewCustomer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_farm_name(mut self, farm_name: impl Into<String>) -> Self {
        self.farm_name = farm_name.into();
        self
    }

    pub fn with_contact_email(mut self, email: impl Into<String>) -> Self {
        self.contact_email = email.into();
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn with_primary_crops(mut self, crops: Vec<String>) -> Self {
        self.primary_crops = crops;
        self
    }

    pub fn into_customer(self, id: u32, customer_since: NaiveDate) -> Customer {
        Customer {
            id,
            name: self.name,
            farm_name: self.farm_name,
            contact_email: self.contact_email,
            contact_phone: self.contact_phone,
            location: self.location,
            farm_size: self.farm_size,
            primary_crops: self.primary_crops,
            customer_since,
            status: CustomerStatus::Active,
            notes: self.notes,
        }
    }
}

/// Partial update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub farm_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub location: Option<Location>,
    pub farm_size: Option<f64>,
    pub primary_crops: Option<Vec<String>>,
    pub status: Option<CustomerStatus>,
    pub notes: Option<String>,
}

impl CustomerUpdate {
    pub fn apply(self, customer: &mut Customer) {
        if let Some(v) = self.name {
            customer.name = v;
        }
        if let Some(v) = self.farm_name {
            customer.farm_name = v;
        }
        if let Some(v) = self.contact_email {
            customer.contact_email = v;
        }
        if let Some(v) = self.contact_phone {
            customer.contact_phone = v;
        }
        if let Some(v) = self.location {
            customer.location = v;
        }
        if let Some(v) = self.farm_size {
            customer.farm_size = v;
        }
        if let Some(v) = self.primary_crops {
            customer.primary_crops = v;
        }
        if let Some(v) = self.status {
            customer.status = v;
        }
        if let Some(v) = self.notes {
            customer.notes = v;
        }
    }
}
