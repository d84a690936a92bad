use crate::cli::OrderCommand;
use crate::model::Order;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{
    format_money, format_order_status, format_payment_status, print_json, print_order_list,
};

pub fn handle_orders(ctx: &mut CommandContext, command: OrderCommand) -> Result<()> {
    match command {
        OrderCommand::List {
            customer,
            status,
            json,
        } => {
            let mut orders = match customer {
                Some(id) => ctx.store.orders.for_customer(id),
                None => ctx.store.orders.list(),
            };
            if let Some(status) = status {
                orders.retain(|o| o.status == status);
            }
            if json {
                print_json(&orders)
            } else {
                print_order_list(&orders);
                Ok(())
            }
        }
        OrderCommand::Show { id, json } => {
            let order = ctx.store.orders.get(id)?;
            if json {
                print_json(&order)
            } else {
                print_order(ctx, &order);
                Ok(())
            }
        }
        OrderCommand::Status { id, status, json } => {
            let order = ctx.store.orders.update_status(id, status)?;
            if json {
                print_json(&order)
            } else {
                println!(
                    "{} order {} -> {}",
                    "Updated".green(),
                    format!("#{}", order.id).cyan(),
                    format_order_status(order.status)
                );
                Ok(())
            }
        }
    }
}

fn print_order(ctx: &CommandContext, order: &Order) {
    let customer = order
        .customer_id
        .parse::<u32>()
        .ok()
        .and_then(|id| ctx.store.customers.get(id).ok())
        .map(|c| format!("{} ({})", order.customer_id.cyan(), c.name.dimmed()))
        .unwrap_or_else(|| order.customer_id.cyan().to_string());

    println!("{} {}", format!("#{}", order.id).cyan().bold(), customer);
    println!("Ordered:  {}", order.order_date);
    if let Some(delivery) = order.delivery_date {
        println!("Delivery: {}", delivery);
    }
    println!("Status:   {}", format_order_status(order.status));
    println!("Payment:  {}", format_payment_status(order.payment_status));
    if !order.payment_method.is_empty() {
        println!("Method:   {}", order.payment_method);
    }

    println!();
    for item in &order.items {
        println!(
            "  {} x {} {} @ {} = {}",
            item.quantity,
            item.unit,
            item.product,
            format_money(item.unit_price),
            format_money(item.line_total())
        );
    }
    println!("Total:    {}", format_money(order.total_amount).bold());

    if !order.notes.is_empty() {
        println!();
        println!("{}", order.notes);
    }
}
