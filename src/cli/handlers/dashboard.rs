use crate::dashboard::Dashboard;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{format_money, print_json};

pub fn handle_dashboard(ctx: &CommandContext, json: bool) -> Result<()> {
    let window = ctx.config.planning.harvest_window_days;
    let dashboard = Dashboard::from_store(&ctx.store, ctx.today, window);
    if json {
        return print_json(&dashboard);
    }

    let crm = &dashboard.crm;
    println!("{}", "Customers & orders".bold());
    println!(
        "  Customers:         {} ({} active)",
        crm.total_customers, crm.active_customers
    );
    println!(
        "  Orders:            {} ({} pending)",
        crm.total_orders, crm.pending_orders
    );
    println!(
        "  Revenue collected: {}",
        format_money(crm.total_revenue).green()
    );
    println!("  Recent activities: {}", crm.recent_activities);

    let planning = &dashboard.planning;
    println!();
    println!("{}", "Planning".bold());
    println!(
        "  Crop cycles:       {} ({} active)",
        planning.total_crops, planning.active_cycles
    );
    println!("  Total acreage:     {}", planning.total_acreage);
    println!(
        "  Harvests due:      {} (next {} days)",
        planning.upcoming_harvests, window
    );
    Ok(())
}
