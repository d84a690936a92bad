//! Crop planning logic.
//!
//! Pure functions over crop cycles and reminders; the repositories in
//! [`crate::storage`] call into these.
//!
//! - [`GrowingPeriods`]: crop type to growing period table and harvest projection
//! - [`build_calendar`]: the 6x7 month grid with planting and harvest events
//! - [`cycles_overlapping`]: date-range overlap filter
//! - [`upcoming_reminders`]: open reminders due within a horizon

mod calendar;
mod harvest;
mod schedule;

pub use calendar::{
    CalendarDay, CalendarEntry, CalendarMonth, CycleEventKind, DAYS_PER_WEEK, GRID_DAYS,
    GRID_WEEKS, build_calendar, grid_origin, month_start, next_month, parse_month,
    previous_month,
};
pub use harvest::{CROP_TYPES, DEFAULT_GROWING_PERIOD, GrowingPeriods, project_harvest_date};
pub use schedule::{cycles_overlapping, harvests_due, upcoming_reminders};
