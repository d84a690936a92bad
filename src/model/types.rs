use crate::error::{FieldbookError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Lowercases and drops separators so `Pest Control`, `pest-control` and
/// `PEST_CONTROL` all compare equal.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Declares a closed set of labels. The label is both the serialized form
/// and the display form; parsing is separator and case insensitive.
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($what:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $label)] $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = FieldbookError;

            fn from_str(s: &str) -> Result<Self> {
                let wanted = normalize(s);
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| normalize(v.as_str()) == wanted)
                    .ok_or_else(|| FieldbookError::Parse(format!("Invalid {}: {}", $what, s)))
            }
        }
    };
}

labeled_enum! {
    pub enum CustomerStatus ("customer status") {
        #[default]
        Active => "Active",
        Inactive => "Inactive",
    }
}

labeled_enum! {
    pub enum OrderStatus ("order status") {
        Quote => "Quote",
        #[default]
        Confirmed => "Confirmed",
        Processing => "Processing",
        Shipped => "Shipped",
        Delivered => "Delivered",
        Cancelled => "Cancelled",
    }
}

impl OrderStatus {
    /// Orders that still need someone to act on them.
    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            OrderStatus::Quote | OrderStatus::Confirmed | OrderStatus::Processing
        )
    }
}

labeled_enum! {
    pub enum PaymentStatus ("payment status") {
        #[default]
        Pending => "Pending",
        Paid => "Paid",
        Overdue => "Overdue",
        Failed => "Failed",
        NotRequired => "Not Required",
    }
}

labeled_enum! {
    pub enum ActivityType ("activity type") {
        #[default]
        PhoneCall => "Phone Call",
        Email => "Email",
        Meeting => "Meeting",
        SiteVisit => "Site Visit",
        OrderDelivery => "Order Delivery",
        OrderShipped => "Order Shipped",
        QuoteSent => "Quote Sent",
        PaymentReceived => "Payment Received",
        AccountReview => "Account Review",
    }
}

labeled_enum! {
    pub enum CropStatus ("crop status") {
        #[default]
        Planned => "Planned",
        Growing => "Growing",
        Harvested => "Harvested",
    }
}

impl CropStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, CropStatus::Planned | CropStatus::Growing)
    }
}

labeled_enum! {
    pub enum ReminderType ("reminder type") {
        #[default]
        Task => "Task",
        Fertilizer => "Fertilizer",
        PestControl => "Pest Control",
        Irrigation => "Irrigation",
        Harvest => "Harvest",
        SoilManagement => "Soil Management",
        Equipment => "Equipment",
        SupplyManagement => "Supply Management",
        FieldPreparation => "Field Preparation",
    }
}

labeled_enum! {
    /// Ordered so that `High` compares greatest.
    #[derive(PartialOrd, Ord)]
    pub enum ReminderPriority ("priority") {
        Low => "Low",
        #[default]
        Medium => "Medium",
        High => "High",
    }
}
