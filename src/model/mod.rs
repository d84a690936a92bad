//! Data models for fieldbook.
//!
//! This module defines the record types held by the store:
//!
//! - [`Customer`]: a farm account and its contact details
//! - [`Order`]: a supply order placed by a customer
//! - [`Activity`]: a logged interaction with a customer
//! - [`CropCycle`]: one planting-to-harvest record for a field
//! - [`Reminder`]: a dated task, optionally tied to a crop cycle
//!
//! Each record has a `New*` input type for creation and a `*Update` type
//! for partial updates.

mod activity;
mod crop_cycle;
mod customer;
mod order;
mod reminder;
mod types;

pub use activity::{Activity, ActivityUpdate, NewActivity, SYSTEM_USER};
pub use crop_cycle::{CropCycle, CropCycleUpdate, FIELD_LOCATIONS, NewCropCycle};
pub use customer::{Customer, CustomerUpdate, Location, NewCustomer};
pub use order::{NewOrder, Order, OrderItem, OrderUpdate};
pub use reminder::{NewReminder, Reminder, ReminderUpdate};
pub use types::{
    ActivityType, CropStatus, CustomerStatus, OrderStatus, PaymentStatus, ReminderPriority,
    ReminderType,
};
