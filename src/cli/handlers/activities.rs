use crate::cli::ActivityCommand;
use crate::storage::DEFAULT_RECENT_LIMIT;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{print_activity_list, print_json};

pub fn handle_activities(ctx: &CommandContext, command: ActivityCommand) -> Result<()> {
    match command {
        ActivityCommand::List {
            customer,
            activity_type,
            limit,
            json,
        } => {
            let mut activities = match (customer, activity_type) {
                (Some(id), _) => ctx.store.activities.for_customer(id),
                (None, Some(kind)) => ctx.store.activities.of_type(kind),
                (None, None) => ctx
                    .store
                    .activities
                    .recent(limit.unwrap_or(DEFAULT_RECENT_LIMIT)),
            };
            if let (Some(_), Some(kind)) = (customer, activity_type) {
                activities.retain(|a| a.activity_type == kind);
            }
            if let Some(limit) = limit {
                activities.truncate(limit);
            }
            if json {
                print_json(&activities)
            } else {
                print_activity_list(&activities);
                Ok(())
            }
        }
        ActivityCommand::Show { id, json } => {
            let activity = ctx.store.activities.get(id)?;
            if json {
                return print_json(&activity);
            }
            println!(
                "{} {}",
                format!("#{}", activity.id).cyan().bold(),
                activity.activity_type.as_str().blue()
            );
            println!("Customer: {}", activity.customer_id.cyan());
            println!(
                "Date:     {}",
                activity.date.format("%Y-%m-%d %H:%M").to_string().dimmed()
            );
            println!("By:       {}", activity.created_by);
            println!();
            println!("{}", activity.description);
            Ok(())
        }
    }
}
