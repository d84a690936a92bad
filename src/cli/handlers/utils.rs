use crate::model::{
    Activity, CropCycle, CropStatus, Customer, CustomerStatus, Order, OrderStatus, PaymentStatus,
    Reminder, ReminderPriority,
};
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format a dollar amount with thousands separators.
pub fn format_money(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let whole = (cents / 100).abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if cents < 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, (cents % 100).abs())
}

pub fn format_crop_status(status: CropStatus) -> colored::ColoredString {
    match status {
        CropStatus::Planned => status.as_str().blue(),
        CropStatus::Growing => status.as_str().green(),
        CropStatus::Harvested => status.as_str().dimmed(),
    }
}

pub fn format_customer_status(status: CustomerStatus) -> colored::ColoredString {
    match status {
        CustomerStatus::Active => status.as_str().green(),
        CustomerStatus::Inactive => status.as_str().dimmed(),
    }
}

pub fn format_order_status(status: OrderStatus) -> colored::ColoredString {
    match status {
        OrderStatus::Quote => status.as_str().white(),
        OrderStatus::Confirmed | OrderStatus::Processing => status.as_str().yellow(),
        OrderStatus::Shipped => status.as_str().blue(),
        OrderStatus::Delivered => status.as_str().green(),
        OrderStatus::Cancelled => status.as_str().red(),
    }
}

pub fn format_payment_status(status: PaymentStatus) -> colored::ColoredString {
    match status {
        PaymentStatus::Paid => status.as_str().green(),
        PaymentStatus::Pending => status.as_str().yellow(),
        PaymentStatus::Overdue | PaymentStatus::Failed => status.as_str().red(),
        PaymentStatus::NotRequired => status.as_str().dimmed(),
    }
}

pub fn format_priority(priority: ReminderPriority) -> colored::ColoredString {
    match priority {
        ReminderPriority::High => priority.as_str().red().bold(),
        ReminderPriority::Medium => priority.as_str().yellow(),
        ReminderPriority::Low => priority.as_str().dimmed(),
    }
}

pub fn print_customer_list(customers: &[Customer]) {
    if customers.is_empty() {
        println!("No customers found.");
        return;
    }
    for customer in customers {
        println!(
            "{} {} [{}] {}",
            format!("#{}", customer.id).cyan(),
            customer.name.bold(),
            format_customer_status(customer.status),
            customer.farm_name.dimmed()
        );
    }
}

pub fn print_order_list(orders: &[Order]) {
    if orders.is_empty() {
        println!("No orders found.");
        return;
    }
    for order in orders {
        println!(
            "{} {} customer {} [{}] [{}] {}",
            format!("#{}", order.id).cyan(),
            order.order_date,
            order.customer_id.cyan(),
            format_order_status(order.status),
            format_payment_status(order.payment_status),
            format_money(order.total_amount)
        );
    }
}

pub fn print_activity_list(activities: &[Activity]) {
    if activities.is_empty() {
        println!("No activities found.");
        return;
    }
    for activity in activities {
        println!(
            "{} {} [{}] customer {} {}",
            format!("#{}", activity.id).cyan(),
            activity.date.format("%Y-%m-%d %H:%M").to_string().dimmed(),
            activity.activity_type.as_str().blue(),
            activity.customer_id.cyan(),
            activity.description
        );
    }
}

pub fn print_cycle_list(cycles: &[CropCycle]) {
    if cycles.is_empty() {
        println!("No crop cycles found.");
        return;
    }
    for cycle in cycles {
        println!(
            "{} {} [{}] {} {} -> {}",
            format!("#{}", cycle.id).cyan(),
            cycle.crop_type.bold(),
            format_crop_status(cycle.status),
            cycle.field_location,
            cycle.planting_date,
            cycle.harvest_date
        );
    }
}

pub fn print_cycle(cycle: &CropCycle) {
    println!(
        "{} {} {}",
        format!("#{}", cycle.id).cyan().bold(),
        cycle.crop_type.bold(),
        cycle.variety.dimmed()
    );
    println!("Status:   {}", format_crop_status(cycle.status));
    println!("Field:    {}", cycle.field_location);
    println!("Acreage:  {}", cycle.acreage);
    println!("Planted:  {}", cycle.planting_date);
    println!("Harvest:  {}", cycle.harvest_date.to_string().green());
    if let Some(planned) = cycle.planned_harvest_date
        && planned != cycle.harvest_date
    {
        println!("Planned:  {}", planned);
    }
    if !cycle.notes.is_empty() {
        println!();
        println!("{}", cycle.notes);
    }
}

pub fn print_reminder_list(reminders: &[Reminder]) {
    if reminders.is_empty() {
        println!("No reminders found.");
        return;
    }
    for reminder in reminders {
        let check = if reminder.completed { "[x]" } else { "[ ]" };
        let crop = reminder
            .crop_cycle_id
            .map(|id| format!(" crop #{}", id))
            .unwrap_or_default();
        println!(
            "{} {} {} [{}] [{}] {}{}",
            format!("#{}", reminder.id).cyan(),
            check,
            reminder.reminder_date,
            reminder.reminder_type.as_str().blue(),
            format_priority(reminder.priority),
            reminder.title,
            crop.dimmed()
        );
    }
}
