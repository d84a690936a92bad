use crate::model::{CropCycle, CropStatus, Reminder};
use chrono::{Days, NaiveDate};
use std::cmp::Reverse;

/// Cycles whose `[planting, harvest]` interval overlaps `[start, end]`.
pub fn cycles_overlapping(cycles: &[CropCycle], start: NaiveDate, end: NaiveDate) -> Vec<CropCycle> {
    cycles
        .iter()
        .filter(|c| c.overlaps(start, end))
        .cloned()
        .collect()
}

/// Open reminders dated within `[today, today + horizon_days]`, soonest
/// first. Reminders on the same day are ordered by priority, highest first.
pub fn upcoming_reminders(reminders: &[Reminder], today: NaiveDate, horizon_days: u32) -> Vec<Reminder> {
    let until = today
        .checked_add_days(Days::new(u64::from(horizon_days)))
        .unwrap_or(NaiveDate::MAX);

    let mut due: Vec<Reminder> = reminders
        .iter()
        .filter(|r| r.is_due_between(today, until))
        .cloned()
        .collect();
    due.sort_by_key(|r| (r.reminder_date, Reverse(r.priority)));
    due
}

/// Cycles not yet harvested whose harvest date is on or before
/// `today + window_days`. Overdue harvests are included.
pub fn harvests_due(cycles: &[CropCycle], today: NaiveDate, window_days: u32) -> Vec<CropCycle> {
    let until = today
        .checked_add_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MAX);
    let mut due: Vec<CropCycle> = cycles
        .iter()
        .filter(|c| c.harvest_date <= until && c.status != CropStatus::Harvested)
        .cloned()
        .collect();
    due.sort_by_key(|c| c.harvest_date);
    due
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ReminderPriority, ReminderType};
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn reminder(id: u32, on: NaiveDate, priority: ReminderPriority, completed: bool) -> Reminder {
        let now = Utc::now();
        Reminder {
            id,
            title: format!("Reminder {}", id),
            description: String::new(),
            reminder_date: on,
            reminder_type: ReminderType::Task,
            priority,
            crop_cycle_id: None,
            completed,
            completed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_upcoming_window_is_inclusive() {
        let today = date(2024, 6, 1);
        let reminders = vec![
            reminder(1, date(2024, 5, 31), ReminderPriority::High, false),
            reminder(2, today, ReminderPriority::Low, false),
            reminder(3, date(2024, 6, 15), ReminderPriority::Medium, false),
            reminder(4, date(2024, 6, 16), ReminderPriority::High, false),
        ];

        let ids: Vec<u32> = upcoming_reminders(&reminders, today, 14)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_upcoming_excludes_completed() {
        let today = date(2024, 6, 1);
        let reminders = vec![
            reminder(1, date(2024, 6, 2), ReminderPriority::High, true),
            reminder(2, date(2024, 6, 3), ReminderPriority::High, false),
        ];
        let due = upcoming_reminders(&reminders, today, 14);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].id, 2);
    }

    #[test]
    fn test_upcoming_sorted_by_date_then_priority() {
        let today = date(2024, 6, 1);
        let reminders = vec![
            reminder(1, date(2024, 6, 5), ReminderPriority::Low, false),
            reminder(2, date(2024, 6, 3), ReminderPriority::Low, false),
            reminder(3, date(2024, 6, 5), ReminderPriority::High, false),
        ];
        let ids: Vec<u32> = upcoming_reminders(&reminders, today, 7)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_harvests_due_skips_harvested() {
        let now = Utc::now();
        let growing = CropCycle {
            id: 1,
            crop_type: "Potatoes".to_string(),
            variety: String::new(),
            field_location: "South Field A".to_string(),
            planting_date: date(2024, 4, 1),
            harvest_date: date(2024, 6, 10),
            planned_harvest_date: None,
            acreage: 20.0,
            status: CropStatus::Growing,
            notes: String::new(),
            created_at: now,
            updated_at: now,
        };
        let mut done = growing.clone();
        done.id = 2;
        done.status = CropStatus::Harvested;
        let mut later = growing.clone();
        later.id = 3;
        later.harvest_date = date(2024, 9, 1);

        let due = harvests_due(&[growing, done, later], date(2024, 6, 1), 30);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].id, 1);
    }
}
