use crate::cli::CropCommand;
use crate::model::{CropCycleUpdate, NewCropCycle};
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{format_crop_status, print_cycle, print_cycle_list, print_json, print_reminder_list};

pub fn handle_crops(ctx: &mut CommandContext, command: CropCommand) -> Result<()> {
    let planning = &mut ctx.store.planning;
    match command {
        CropCommand::List { status, json } => {
            let cycles = match status {
                Some(status) => planning.cycles_with_status(status),
                None => planning.list_cycles(),
            };
            if json {
                print_json(&cycles)
            } else {
                print_cycle_list(&cycles);
                Ok(())
            }
        }
        CropCommand::Show { id, json } => {
            let cycle = planning.get_cycle(id)?;
            let reminders = planning.reminders_for_cycle(id);
            if json {
                return print_json(&serde_json::json!({
                    "cropCycle": cycle,
                    "reminders": reminders,
                }));
            }
            print_cycle(&cycle);
            println!();
            println!("{}", "Reminders".bold());
            print_reminder_list(&reminders);
            Ok(())
        }
        CropCommand::Range { start, end, json } => {
            if end < start {
                anyhow::bail!("Range end {} is before start {}", end, start);
            }
            let cycles = planning.cycles_in_range(start, end);
            if json {
                print_json(&cycles)
            } else {
                print_cycle_list(&cycles);
                Ok(())
            }
        }
        CropCommand::Create {
            crop_type,
            field,
            planted,
            variety,
            acreage,
            planned_harvest,
            notes,
            json,
        } => {
            let input = NewCropCycle {
                crop_type,
                variety,
                field_location: field,
                planting_date: planted,
                planned_harvest_date: planned_harvest,
                acreage,
                notes,
            };
            let cycle = planning.create_cycle(input)?;
            if json {
                print_json(&cycle)
            } else {
                println!(
                    "{} crop cycle {} {} in {}, harvest {}",
                    "Created".green(),
                    format!("#{}", cycle.id).cyan(),
                    cycle.crop_type.bold(),
                    cycle.field_location,
                    cycle.harvest_date.to_string().green()
                );
                Ok(())
            }
        }
        CropCommand::Update {
            id,
            crop_type,
            planted,
            harvest,
            field,
            variety,
            acreage,
            notes,
            json,
        } => {
            let update = CropCycleUpdate {
                crop_type,
                variety,
                field_location: field,
                planting_date: planted,
                harvest_date: harvest,
                acreage,
                notes,
                ..Default::default()
            };
            let cycle = planning.update_cycle(id, update)?;
            if json {
                print_json(&cycle)
            } else {
                println!(
                    "{} crop cycle {}",
                    "Updated".green(),
                    format!("#{}", cycle.id).cyan()
                );
                print_cycle(&cycle);
                Ok(())
            }
        }
        CropCommand::Status { id, status, json } => {
            let cycle = planning.update_cycle_status(id, status)?;
            if json {
                print_json(&cycle)
            } else {
                println!(
                    "{} crop cycle {} -> {}",
                    "Updated".green(),
                    format!("#{}", cycle.id).cyan(),
                    format_crop_status(cycle.status)
                );
                Ok(())
            }
        }
        CropCommand::Delete { id, json } => {
            let linked = planning.reminders_for_cycle(id).len();
            let removed = planning.delete_cycle(id)?;
            if json {
                print_json(&serde_json::json!({
                    "action": "deleted",
                    "id": removed.id,
                    "remindersRemoved": linked,
                }))
            } else {
                println!(
                    "{} crop cycle {} {} ({} reminders removed)",
                    "Deleted".red(),
                    format!("#{}", removed.id).cyan(),
                    removed.crop_type,
                    linked
                );
                Ok(())
            }
        }
    }
}
