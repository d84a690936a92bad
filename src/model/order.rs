use super::types::{OrderStatus, PaymentStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    pub unit_price: f64,
}

impl OrderItem {
    pub fn new(product: impl Into<String>, quantity: f64, unit: impl Into<String>, unit_price: f64) -> Self {
        Self {
            product: product.into(),
            quantity,
            unit: unit.into(),
            unit_price,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "Id")]
    pub id: u32,

    /// String-typed reference to `Customer::id`.
    pub customer_id: String,

    pub order_date: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<NaiveDate>,

    #[serde(default)]
    pub status: OrderStatus,

    #[serde(default)]
    pub payment_status: PaymentStatus,

    #[serde(default)]
    pub payment_method: String,

    #[serde(default)]
    pub items: Vec<OrderItem>,

    #[serde(default)]
    pub total_amount: f64,

    #[serde(default)]
    pub notes: String,
}

impl Order {
    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }

    /// Delivered and paid orders are the only ones counted as revenue.
    pub fn is_realized_revenue(&self) -> bool {
        self.status == OrderStatus::Delivered && self.payment_status == PaymentStatus::Paid
    }

    pub fn items_total(&self) -> f64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewOrder {
    pub customer_id: String,
    pub delivery_date: Option<NaiveDate>,
    pub payment_method: String,
    pub items: Vec<OrderItem>,
    /// Falls back to the sum of the item lines.
    pub total_amount: Option<f64>,
    pub notes: String,
}

impl NewOrder {
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            ..Default::default()
        }
    }

    pub fn with_item(mut self, item: OrderItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_delivery_date(mut self, date: NaiveDate) -> Self {
        self.delivery_date = Some(date);
        self
    }

    pub fn with_payment_method(mut self, method: impl Into<String>) -> Self {
        self.payment_method = method.into();
        self
    }

    pub fn into_order(self, id: u32, order_date: NaiveDate) -> Order {
        let total_amount = self
            .total_amount
            .unwrap_or_else(|| self.items.iter().map(OrderItem::line_total).sum());
        Order {
            id,
            customer_id: self.customer_id,
            order_date,
            delivery_date: self.delivery_date,
            status: OrderStatus::Confirmed,
            payment_status: PaymentStatus::Pending,
            payment_method: self.payment_method,
            items: self.items,
            total_amount,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderUpdate {
    pub customer_id: Option<String>,
    pub delivery_date: Option<NaiveDate>,
    pub status: Option<OrderStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub payment_method: Option<String>,
    pub items: Option<Vec<OrderItem>>,
    pub total_amount: Option<f64>,
    pub notes: Option<String>,
}

impl OrderUpdate {
    pub fn apply(self, order: &mut Order) {
        if let Some(v) = self.customer_id {
            order.customer_id = v;
        }
        if let Some(v) = self.delivery_date {
            order.delivery_date = Some(v);
        }
        if let Some(v) = self.status {
            order.status = v;
        }
        if let Some(v) = self.payment_status {
            order.payment_status = v;
        }
        if let Some(v) = self.payment_method {
            order.payment_method = v;
        }
        if let Some(v) = self.items {
            order.items = v;
        }
        if let Some(v) = self.total_amount {
            order.total_amount = v;
        }
        if let Some(v) = self.notes {
            order.notes = v;
        }
    }
}
