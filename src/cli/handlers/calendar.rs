use crate::planning::{self, CalendarMonth, CycleEventKind};
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use colored::Colorize;

use super::CommandContext;
use super::utils::print_json;

const WEEKDAY_HEADER: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn handle_calendar(ctx: &CommandContext, month: Option<String>, json: bool) -> Result<()> {
    let reference = match month {
        Some(m) => planning::parse_month(&m)?,
        None => ctx.today,
    };
    let calendar = ctx.store.planning.calendar_on(reference, ctx.today);

    if json {
        print_json(&calendar)
    } else {
        print_calendar(&calendar);
        Ok(())
    }
}

fn print_calendar(calendar: &CalendarMonth) {
    let first = calendar.month_start;
    println!("{}", first.format("%B %Y").to_string().bold());
    println!(
        "{}",
        WEEKDAY_HEADER
            .iter()
            .map(|d| format!("{:>5}", d))
            .collect::<String>()
            .dimmed()
    );

    for week in calendar.weeks() {
        let row: String = week
            .iter()
            .map(|day| {
                let marker = match (
                    day.entries.iter().any(|e| e.kind == CycleEventKind::Planting),
                    day.entries.iter().any(|e| e.kind == CycleEventKind::Harvest),
                ) {
                    (true, true) => "*",
                    (true, false) => "P",
                    (false, true) => "H",
                    (false, false) => " ",
                };
                let cell = format!("{:>4}{}", day.date.day(), marker);
                if day.is_today {
                    cell.reversed().to_string()
                } else if !day.in_month {
                    cell.dimmed().to_string()
                } else if !day.entries.is_empty() {
                    cell.green().to_string()
                } else {
                    cell
                }
            })
            .collect();
        println!("{}", row);
    }

    let events: Vec<_> = calendar
        .days
        .iter()
        .flat_map(|day| day.entries.iter().map(move |e| (day.date, e)))
        .collect();
    println!();
    if events.is_empty() {
        println!("No plantings or harvests this period.");
    } else {
        for (date, entry) in events {
            let label = match entry.kind {
                CycleEventKind::Planting => "Plant  ".blue(),
                CycleEventKind::Harvest => "Harvest".green(),
            };
            println!(
                "{} {} {} {} ({})",
                date,
                label,
                format!("#{}", entry.cycle.id).cyan(),
                entry.cycle.crop_type,
                entry.cycle.field_location
            );
        }
    }
    println!();
    println!(
        "{}",
        format!(
            "prev: --month {}   next: --month {}",
            planning::previous_month(first).format("%Y-%m"),
            planning::next_month(first).format("%Y-%m")
        )
        .dimmed()
    );
}

pub fn handle_harvest_date(
    ctx: &CommandContext,
    crop_type: String,
    planting_date: NaiveDate,
    json: bool,
) -> Result<()> {
    let periods = ctx.store.planning.growing_periods();
    let known = periods.is_known(&crop_type);
    let days = periods.lookup(&crop_type).unwrap_or(periods.fallback());
    let harvest_date = ctx.store.planning.project_harvest(planting_date, &crop_type);

    if json {
        return print_json(&serde_json::json!({
            "cropType": crop_type,
            "plantingDate": planting_date,
            "growingPeriod": days,
            "knownCropType": known,
            "harvestDate": harvest_date,
        }));
    }

    println!("{}", harvest_date);
    if !known {
        eprintln!(
            "{} unknown crop type {}, assumed {} days",
            "note:".yellow(),
            crop_type.cyan(),
            days
        );
    }
    Ok(())
}

pub fn handle_crop_types(ctx: &CommandContext, json: bool) -> Result<()> {
    let periods = ctx.store.planning.growing_periods();
    if json {
        let table: serde_json::Map<String, serde_json::Value> = periods
            .iter()
            .map(|(name, days)| (name.to_string(), days.into()))
            .collect();
        return print_json(&serde_json::json!({
            "cropTypes": table,
            "defaultGrowingPeriod": periods.fallback(),
        }));
    }

    for (name, days) in periods.iter() {
        println!("{:<12} {:>4} days", name, days);
    }
    println!(
        "{}",
        format!("{:<12} {:>4} days", "(other)", periods.fallback()).dimmed()
    );
    Ok(())
}
