use super::latency::{Latency, Operation};
use super::table::{Placement, Record, Table};
use crate::{
    error::{FieldbookError, Result},
    model::{NewOrder, Order, OrderStatus, OrderUpdate},
    validation,
};
use chrono::{Local, NaiveDate};

impl Record for Order {
    const KIND: &'static str = "Order";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

pub struct OrderRepository {
    table: Table<Order>,
    latency: Latency,
}

impl OrderRepository {
    pub fn new(orders: Vec<Order>, latency: Latency) -> Self {
        Self {
            table: Table::new(orders),
            latency,
        }
    }

    pub fn list(&self) -> Vec<Order> {
        self.latency.pause(Operation::List);
        self.table.rows().to_vec()
    }

    pub fn get(&self, id: u32) -> Result<Order> {
        self.latency.pause(Operation::Read);
        self.table.get(id).cloned()
    }

    pub fn for_customer(&self, customer_id: u32) -> Vec<Order> {
        self.latency.pause(Operation::List);
        let key = customer_id.to_string();
        self.table.filter(|o| o.customer_id == key)
    }

    pub fn with_status(&self, status: OrderStatus) -> Vec<Order> {
        self.latency.pause(Operation::List);
        self.table.filter(|o| o.status == status)
    }

    pub fn create(&mut self, input: NewOrder) -> Result<Order> {
        self.create_on(input, Local::now().date_naive())
    }

    /// Places an order dated `today`, confirmed and awaiting payment.
    pub fn create_on(&mut self, input: NewOrder, today: NaiveDate) -> Result<Order> {
        self.latency.pause(Operation::Write);
        if input.customer_id.trim().is_empty() {
            return Err(FieldbookError::Validation(
                "Order requires a customer".to_string(),
            ));
        }
        validation::validate_order_items(&input.items)?;
        validation::validate_text("Notes", &input.notes)?;

        let order = self.table.insert(input.into_order(0, today), Placement::Back)?;
        tracing::info!(
            id = order.id,
            customer_id = %order.customer_id,
            total = order.total_amount,
            "Created order"
        );
        Ok(order)
    }

    pub fn update(&mut self, id: u32, update: OrderUpdate) -> Result<Order> {
        self.latency.pause(Operation::Write);
        if let Some(items) = &update.items {
            validation::validate_order_items(items)?;
        }
        if let Some(notes) = &update.notes {
            validation::validate_text("Notes", notes)?;
        }
        let order = self.table.get_mut(id)?;
        update.apply(order);
        tracing::info!(id, "Updated order");
        Ok(order.clone())
    }

    pub fn update_status(&mut self, id: u32, status: OrderStatus) -> Result<Order> {
        self.latency.pause(Operation::Write);
        let order = self.table.get_mut(id)?;
        order.status = status;
        tracing::info!(id, status = %status, "Updated order status");
        Ok(order.clone())
    }

    pub fn delete(&mut self, id: u32) -> Result<Order> {
        self.latency.pause(Operation::Write);
        let removed = self.table.remove(id)?;
        tracing::info!(id, "Deleted order");
        Ok(removed)
    }
}
