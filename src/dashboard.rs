//! Summary figures for the dashboard, customer detail and planning views.

use crate::model::{Activity, CropCycle, Customer, Order, PaymentStatus};
use crate::planning;
use crate::storage::Store;
use chrono::NaiveDate;
use serde::Serialize;

/// How many of the newest activities the dashboard counts.
pub const RECENT_ACTIVITY_WINDOW: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrmMetrics {
    pub total_customers: usize,
    pub active_customers: usize,
    pub total_orders: usize,
    pub pending_orders: usize,
    /// Sum over orders that are both delivered and paid.
    pub total_revenue: f64,
    pub recent_activities: usize,
}

impl CrmMetrics {
    pub fn compute(customers: &[Customer], orders: &[Order], activities: &[Activity]) -> Self {
        Self {
            total_customers: customers.len(),
            active_customers: customers.iter().filter(|c| c.is_active()).count(),
            total_orders: orders.len(),
            pending_orders: orders.iter().filter(|o| o.is_pending()).count(),
            total_revenue: orders
                .iter()
                .filter(|o| o.is_realized_revenue())
                .map(|o| o.total_amount)
                .sum(),
            recent_activities: activities.len().min(RECENT_ACTIVITY_WINDOW),
        }
    }
}

/// Order totals for a single customer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    pub order_count: usize,
    pub total_order_value: f64,
    pub total_paid_value: f64,
}

impl CustomerSummary {
    pub fn compute(orders: &[Order]) -> Self {
        Self {
            order_count: orders.len(),
            total_order_value: orders.iter().map(|o| o.total_amount).sum(),
            total_paid_value: orders
                .iter()
                .filter(|o| o.payment_status == PaymentStatus::Paid)
                .map(|o| o.total_amount)
                .sum(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningMetrics {
    pub total_crops: usize,
    pub active_cycles: usize,
    pub total_acreage: f64,
    pub upcoming_harvests: usize,
}

impl PlanningMetrics {
    pub fn compute(cycles: &[CropCycle], today: NaiveDate, harvest_window_days: u32) -> Self {
        Self {
            total_crops: cycles.len(),
            active_cycles: cycles.iter().filter(|c| c.is_active()).count(),
            total_acreage: cycles.iter().map(|c| c.acreage).sum(),
            upcoming_harvests: planning::harvests_due(cycles, today, harvest_window_days).len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub crm: CrmMetrics,
    pub planning: PlanningMetrics,
}

impl Dashboard {
    pub fn from_store(store: &Store, today: NaiveDate, harvest_window_days: u32) -> Self {
        Self {
            crm: CrmMetrics::compute(
                &store.customers.list(),
                &store.orders.list(),
                &store.activities.list(),
            ),
            planning: PlanningMetrics::compute(
                &store.planning.list_cycles(),
                today,
                harvest_window_days,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Latency, SeedData};
    use crate::planning::GrowingPeriods;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seeded_store() -> Store {
        Store::from_seed(
            SeedData::embedded().unwrap(),
            GrowingPeriods::default(),
            Latency::none(),
        )
    }

    #[test]
    fn test_crm_metrics_from_seed() {
        let store = seeded_store();
        let dashboard = Dashboard::from_store(&store, date(2024, 7, 20), 30);
        let crm = dashboard.crm;
        assert_eq!(crm.total_customers, 5);
        assert_eq!(crm.active_customers, 4);
        assert_eq!(crm.total_orders, 6);
        // Quote, Processing
        assert_eq!(crm.pending_orders, 2);
        // only order 1 is delivered and paid
        assert_eq!(crm.total_revenue, 39600.0);
        assert_eq!(crm.recent_activities, 7);
    }

    #[test]
    fn test_planning_metrics_from_seed() {
        let store = seeded_store();
        let metrics = Dashboard::from_store(&store, date(2024, 7, 20), 30).planning;
        assert_eq!(metrics.total_crops, 6);
        assert_eq!(metrics.active_cycles, 4);
        assert_eq!(metrics.total_acreage, 180.5);
        // corn 08-13, soybeans 08-09, tomatoes 08-13, potatoes 06-10 (overdue)
        assert_eq!(metrics.upcoming_harvests, 4);
    }

    #[test]
    fn test_customer_summary() {
        let store = seeded_store();
        let summary = CustomerSummary::compute(&store.orders.for_customer(1));
        assert_eq!(summary.order_count, 2);
        assert_eq!(summary.total_order_value, 45180.0);
        assert_eq!(summary.total_paid_value, 39600.0);
    }

    #[test]
    fn test_empty_store() {
        let store = Store::empty();
        let dashboard = Dashboard::from_store(&store, date(2024, 7, 20), 30);
        assert_eq!(dashboard.crm.total_revenue, 0.0);
        assert_eq!(dashboard.planning.upcoming_harvests, 0);
    }
}
