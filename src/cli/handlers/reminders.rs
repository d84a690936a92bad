use crate::cli::ReminderCommand;
use crate::model::NewReminder;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{print_json, print_reminder_list};

pub fn handle_reminders(ctx: &mut CommandContext, command: ReminderCommand) -> Result<()> {
    let planning = &mut ctx.store.planning;
    match command {
        ReminderCommand::List { crop, open, json } => {
            let mut reminders = match crop {
                Some(id) => planning.reminders_for_cycle(id),
                None => planning.list_reminders(),
            };
            if open {
                reminders.retain(|r| !r.completed);
            }
            if json {
                print_json(&reminders)
            } else {
                print_reminder_list(&reminders);
                Ok(())
            }
        }
        ReminderCommand::Upcoming { days, json } => {
            let horizon = days.unwrap_or(ctx.config.planning.upcoming_days);
            let reminders = planning.upcoming_reminders_from(ctx.today, horizon);
            if json {
                print_json(&reminders)
            } else {
                println!(
                    "{}",
                    format!("Due in the next {} days from {}", horizon, ctx.today).dimmed()
                );
                print_reminder_list(&reminders);
                Ok(())
            }
        }
        ReminderCommand::Create {
            title,
            date,
            reminder_type,
            priority,
            crop,
            description,
            json,
        } => {
            let input = NewReminder {
                title,
                description,
                reminder_date: date,
                reminder_type,
                priority,
                crop_cycle_id: crop,
            };
            let reminder = planning.create_reminder(input)?;
            if json {
                print_json(&reminder)
            } else {
                println!(
                    "{} reminder {} {} on {}",
                    "Created".green(),
                    format!("#{}", reminder.id).cyan(),
                    reminder.title,
                    reminder.reminder_date
                );
                Ok(())
            }
        }
        ReminderCommand::Complete { id, json } => {
            let reminder = planning.complete_reminder(id)?;
            if json {
                print_json(&reminder)
            } else {
                println!(
                    "{} reminder {} {}",
                    "Completed".green(),
                    format!("#{}", reminder.id).cyan(),
                    reminder.title
                );
                Ok(())
            }
        }
        ReminderCommand::Delete { id, json } => {
            let removed = planning.delete_reminder(id)?;
            if json {
                print_json(&serde_json::json!({
                    "action": "deleted",
                    "id": removed.id
                }))
            } else {
                println!(
                    "{} reminder {} {}",
                    "Deleted".red(),
                    format!("#{}", removed.id).cyan(),
                    removed.title
                );
                Ok(())
            }
        }
    }
}
