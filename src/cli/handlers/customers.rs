use crate::cli::CustomerCommand;
use crate::dashboard::CustomerSummary;
use crate::model::{Customer, Location, NewCustomer};
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{
    format_customer_status, format_money, print_activity_list, print_customer_list, print_json,
    print_order_list,
};

/// How many orders and activities `customers show` lists.
const DETAIL_ROWS: usize = 5;

pub fn handle_customers(ctx: &mut CommandContext, command: CustomerCommand) -> Result<()> {
    match command {
        CustomerCommand::List { status, json } => {
            let mut customers = ctx.store.customers.list();
            if let Some(status) = status {
                customers.retain(|c| c.status == status);
            }
            if json {
                print_json(&customers)
            } else {
                print_customer_list(&customers);
                Ok(())
            }
        }
        CustomerCommand::Show { id, json } => show(ctx, id, json),
        CustomerCommand::Search { query, json } => {
            let customers = ctx.store.customers.search(&query);
            if json {
                print_json(&customers)
            } else {
                print_customer_list(&customers);
                Ok(())
            }
        }
        CustomerCommand::Create {
            name,
            farm,
            email,
            phone,
            city,
            state,
            farm_size,
            crop,
            notes,
            json,
        } => {
            let input = NewCustomer {
                name,
                farm_name: farm.unwrap_or_default(),
                contact_email: email.unwrap_or_default(),
                contact_phone: phone.unwrap_or_default(),
                location: Location {
                    city: city.unwrap_or_default(),
                    state: state.unwrap_or_default(),
                    ..Default::default()
                },
                farm_size: farm_size.unwrap_or_default(),
                primary_crops: crop,
                notes: notes.unwrap_or_default(),
            };
            let customer = ctx.store.customers.create_on(input, ctx.today)?;
            if json {
                print_json(&customer)
            } else {
                println!(
                    "{} customer {} {}",
                    "Created".green(),
                    format!("#{}", customer.id).cyan(),
                    customer.name
                );
                Ok(())
            }
        }
        CustomerCommand::Delete { id, json } => {
            let removed = ctx.store.customers.delete(id)?;
            if json {
                print_json(&serde_json::json!({
                    "action": "deleted",
                    "id": removed.id
                }))
            } else {
                println!(
                    "{} customer {} {}",
                    "Deleted".red(),
                    format!("#{}", removed.id).cyan(),
                    removed.name
                );
                Ok(())
            }
        }
    }
}

fn show(ctx: &CommandContext, id: u32, json: bool) -> Result<()> {
    let customer = ctx.store.customers.get(id)?;
    let orders = ctx.store.orders.for_customer(id);
    let summary = CustomerSummary::compute(&orders);

    if json {
        return print_json(&serde_json::json!({
            "customer": customer,
            "summary": summary,
        }));
    }

    print_customer(&customer);
    println!();
    println!("Orders:   {}", summary.order_count);
    println!("Value:    {}", format_money(summary.total_order_value));
    println!("Paid:     {}", format_money(summary.total_paid_value).green());

    println!();
    println!("{}", "Recent orders".bold());
    let recent: Vec<_> = orders.into_iter().take(DETAIL_ROWS).collect();
    print_order_list(&recent);

    println!();
    println!("{}", "Recent activity".bold());
    let mut activities = ctx.store.activities.for_customer(id);
    activities.truncate(DETAIL_ROWS);
    print_activity_list(&activities);
    Ok(())
}

fn print_customer(customer: &Customer) {
    println!(
        "{} {}",
        format!("#{}", customer.id).cyan().bold(),
        customer.name.bold()
    );
    println!("Farm:     {}", customer.farm_name);
    println!("Status:   {}", format_customer_status(customer.status));
    if !customer.contact_email.is_empty() {
        println!("Email:    {}", customer.contact_email);
    }
    if !customer.contact_phone.is_empty() {
        println!("Phone:    {}", customer.contact_phone);
    }
    let location = &customer.location;
    if !location.city.is_empty() {
        println!("Location: {}, {}", location.city, location.state);
    }
    println!("Size:     {} acres", customer.farm_size);
    if !customer.primary_crops.is_empty() {
        println!("Crops:    {}", customer.primary_crops.join(", ").yellow());
    }
    println!(
        "Since:    {}",
        customer.customer_since.to_string().dimmed()
    );
    if !customer.notes.is_empty() {
        println!();
        println!("{}", customer.notes);
    }
}
