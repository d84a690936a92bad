//! Month grid for the planning calendar.
//!
//! A grid always has six rows of seven days, starting on the Sunday on or
//! before the first of the month, so every month renders at the same size.

use crate::error::{FieldbookError, Result};
use crate::model::CropCycle;
use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;

pub const DAYS_PER_WEEK: usize = 7;
pub const GRID_WEEKS: usize = 6;
pub const GRID_DAYS: usize = DAYS_PER_WEEK * GRID_WEEKS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleEventKind {
    Planting,
    Harvest,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    pub kind: CycleEventKind,
    pub cycle: CropCycle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub in_month: bool,
    pub is_today: bool,
    pub entries: Vec<CalendarEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMonth {
    pub month_start: NaiveDate,
    pub days: Vec<CalendarDay>,
}

impl CalendarMonth {
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(DAYS_PER_WEEK)
    }

    pub fn day(&self, date: NaiveDate) -> Option<&CalendarDay> {
        self.days.iter().find(|d| d.date == date)
    }

    /// Number of planting and harvest events shown on the grid.
    pub fn event_count(&self) -> usize {
        self.days.iter().map(|d| d.entries.len()).sum()
    }
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.checked_sub_days(Days::new(u64::from(date.day0())))
        .unwrap_or(date)
}

/// The Sunday on or before the first of `reference`'s month.
pub fn grid_origin(reference: NaiveDate) -> NaiveDate {
    let first = month_start(reference);
    let back = u64::from(first.weekday().num_days_from_sunday());
    first.checked_sub_days(Days::new(back)).unwrap_or(first)
}

pub fn next_month(date: NaiveDate) -> NaiveDate {
    let first = month_start(date);
    first.checked_add_months(Months::new(1)).unwrap_or(first)
}

pub fn previous_month(date: NaiveDate) -> NaiveDate {
    let first = month_start(date);
    first.checked_sub_months(Months::new(1)).unwrap_or(first)
}

/// Parses `YYYY-MM` (or a full `YYYY-MM-DD`) into the first of that month.
pub fn parse_month(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(&format!("{}-01", trimmed), "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map(month_start))
        .map_err(|_| FieldbookError::Parse(format!("Invalid month (expected YYYY-MM): {}", input)))
}

/// The event a cycle contributes to `day`, if any. Planting wins when both
/// dates fall on the same day so a cycle is listed at most once per cell.
fn event_on(cycle: &CropCycle, day: NaiveDate) -> Option<CycleEventKind> {
    if cycle.planting_date == day {
        Some(CycleEventKind::Planting)
    } else if cycle.harvest_date == day {
        Some(CycleEventKind::Harvest)
    } else {
        None
    }
}

/// Builds the 42-day grid for the month containing `reference`, attaching
/// every cycle planted or harvested on a given day.
pub fn build_calendar(reference: NaiveDate, cycles: &[CropCycle], today: NaiveDate) -> CalendarMonth {
    let first = month_start(reference);
    let origin = grid_origin(reference);

    let days = origin
        .iter_days()
        .take(GRID_DAYS)
        .map(|date| {
            let entries = cycles
                .iter()
                .filter_map(|cycle| {
                    event_on(cycle, date).map(|kind| CalendarEntry {
                        kind,
                        cycle: cycle.clone(),
                    })
                })
                .collect();
            CalendarDay {
                date,
                in_month: date.year() == first.year() && date.month() == first.month(),
                is_today: date == today,
                entries,
            }
        })
        .collect();

    CalendarMonth {
        month_start: first,
        days,
    }
}
