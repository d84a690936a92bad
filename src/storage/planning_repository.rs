use super::latency::{Latency, Operation};
use super::table::{Placement, Record, Table};
use crate::{
    error::{FieldbookError, Result},
    model::{
        CropCycle, CropCycleUpdate, CropStatus, NewCropCycle, NewReminder, Reminder,
        ReminderUpdate,
    },
    planning::{self, CalendarMonth, GrowingPeriods},
    validation,
};
use chrono::{Local, NaiveDate, Utc};

impl Record for CropCycle {
    const KIND: &'static str = "Crop cycle";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

impl Record for Reminder {
    const KIND: &'static str = "Reminder";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

/// Crop cycles and their reminders.
///
/// Both tables live together because deleting a cycle must also delete the
/// reminders that point at it.
pub struct PlanningRepository {
    cycles: Table<CropCycle>,
    reminders: Table<Reminder>,
    periods: GrowingPeriods,
    latency: Latency,
}

impl PlanningRepository {
    pub fn new(
        cycles: Vec<CropCycle>,
        reminders: Vec<Reminder>,
        periods: GrowingPeriods,
        latency: Latency,
    ) -> Self {
        Self {
            cycles: Table::new(cycles),
            reminders: Table::new(reminders),
            periods,
            latency,
        }
    }

    pub fn growing_periods(&self) -> &GrowingPeriods {
        &self.periods
    }

    pub fn project_harvest(&self, planting_date: NaiveDate, crop_type: &str) -> NaiveDate {
        self.periods.project_harvest(planting_date, crop_type)
    }

    // ---------------------------------------------------------------------
    // Crop cycles
    // ---------------------------------------------------------------------

    pub fn list_cycles(&self) -> Vec<CropCycle> {
        self.latency.pause(Operation::List);
        self.cycles.rows().to_vec()
    }

    pub fn get_cycle(&self, id: u32) -> Result<CropCycle> {
        self.latency.pause(Operation::Read);
        self.cycles.get(id).cloned()
    }

    pub fn cycles_with_status(&self, status: CropStatus) -> Vec<CropCycle> {
        self.latency.pause(Operation::List);
        self.cycles.filter(|c| c.status == status)
    }

    /// Cycles whose growing season overlaps `[start, end]`.
    pub fn cycles_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<CropCycle> {
        self.latency.pause(Operation::List);
        let found = planning::cycles_overlapping(self.cycles.rows(), start, end);
        tracing::debug!(%start, %end, hits = found.len(), "Queried crop cycles by range");
        found
    }

    pub fn create_cycle(&mut self, input: NewCropCycle) -> Result<CropCycle> {
        self.latency.pause(Operation::Write);
        let fields = validation::validate_new_crop_cycle(&input)?;

        let harvest_date = self
            .periods
            .project_harvest(fields.planting_date, &fields.crop_type);
        let now = Utc::now();
        let cycle = CropCycle {
            id: 0,
            crop_type: fields.crop_type,
            variety: input.variety.unwrap_or_default(),
            field_location: fields.field_location,
            planting_date: fields.planting_date,
            harvest_date,
            planned_harvest_date: Some(input.planned_harvest_date.unwrap_or(harvest_date)),
            acreage: input.acreage.unwrap_or(0.0),
            status: CropStatus::Planned,
            notes: input.notes.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        let cycle = self.cycles.insert(cycle, Placement::Front)?;
        tracing::info!(
            id = cycle.id,
            crop_type = %cycle.crop_type,
            field = %cycle.field_location,
            %harvest_date,
            "Created crop cycle"
        );
        Ok(cycle)
    }

    /// Merges `update` into the cycle. A new crop type or planting date
    /// re-projects the harvest date; an explicit `harvest_date` wins.
    pub fn update_cycle(&mut self, id: u32, update: CropCycleUpdate) -> Result<CropCycle> {
        self.latency.pause(Operation::Write);
        let update = validation::validate_crop_cycle_update(update)?;

        let periods = &self.periods;
        let cycle = self.cycles.get_mut(id)?;

        let reschedule = update.changes_schedule(cycle);
        let CropCycleUpdate {
            crop_type,
            variety,
            field_location,
            planting_date,
            harvest_date,
            planned_harvest_date,
            acreage,
            status,
            notes,
        } = update;

        if let Some(v) = crop_type {
            cycle.crop_type = v;
        }
        if let Some(v) = planting_date {
            cycle.planting_date = v;
        }
        if let Some(v) = variety {
            cycle.variety = v;
        }
        if let Some(v) = field_location {
            cycle.field_location = v;
        }
        if let Some(v) = planned_harvest_date {
            cycle.planned_harvest_date = Some(v);
        }
        if let Some(v) = acreage {
            cycle.acreage = v;
        }
        if let Some(v) = status {
            cycle.status = v;
        }
        if let Some(v) = notes {
            cycle.notes = v;
        }

        cycle.harvest_date = match harvest_date {
            Some(explicit) => explicit,
            None if reschedule => periods.project_harvest(cycle.planting_date, &cycle.crop_type),
            None => cycle.harvest_date,
        };
        cycle.touch();

        tracing::info!(
            id,
            crop_type = %cycle.crop_type,
            harvest_date = %cycle.harvest_date,
            rescheduled = reschedule,
            "Updated crop cycle"
        );
        Ok(cycle.clone())
    }

    pub fn update_cycle_status(&mut self, id: u32, status: CropStatus) -> Result<CropCycle> {
        self.latency.pause(Operation::Write);
        let cycle = self.cycles.get_mut(id)?;
        cycle.status = status;
        cycle.touch();
        tracing::info!(id, status = %status, "Updated crop cycle status");
        Ok(cycle.clone())
    }

    /// Deletes the cycle and every reminder linked to it.
    pub fn delete_cycle(&mut self, id: u32) -> Result<CropCycle> {
        self.latency.pause(Operation::Write);
        let removed = self.cycles.remove(id)?;
        let orphans = self.reminders.remove_where(|r| r.belongs_to(id));
        tracing::info!(
            id,
            crop_type = %removed.crop_type,
            reminders_removed = orphans.len(),
            "Deleted crop cycle"
        );
        Ok(removed)
    }

    /// The 6x7 planning grid for the month containing `reference`.
    pub fn calendar(&self, reference: NaiveDate) -> CalendarMonth {
        self.calendar_on(reference, Local::now().date_naive())
    }

    pub fn calendar_on(&self, reference: NaiveDate, today: NaiveDate) -> CalendarMonth {
        self.latency.pause(Operation::List);
        planning::build_calendar(reference, self.cycles.rows(), today)
    }

    /// Unharvested cycles due within `window_days` of `today`, soonest first.
    pub fn harvests_due(&self, today: NaiveDate, window_days: u32) -> Vec<CropCycle> {
        self.latency.pause(Operation::List);
        planning::harvests_due(self.cycles.rows(), today, window_days)
    }

    // ---------------------------------------------------------------------
    // Reminders
    // ---------------------------------------------------------------------

    pub fn list_reminders(&self) -> Vec<Reminder> {
        self.latency.pause(Operation::List);
        self.reminders.rows().to_vec()
    }

    pub fn get_reminder(&self, id: u32) -> Result<Reminder> {
        self.latency.pause(Operation::Read);
        self.reminders.get(id).cloned()
    }

    pub fn reminders_for_cycle(&self, cycle_id: u32) -> Vec<Reminder> {
        self.latency.pause(Operation::List);
        self.reminders.filter(|r| r.belongs_to(cycle_id))
    }

    pub fn upcoming_reminders(&self, horizon_days: u32) -> Vec<Reminder> {
        self.upcoming_reminders_from(Local::now().date_naive(), horizon_days)
    }

    /// Open reminders dated within `[today, today + horizon_days]`.
    pub fn upcoming_reminders_from(&self, today: NaiveDate, horizon_days: u32) -> Vec<Reminder> {
        self.latency.pause(Operation::List);
        planning::upcoming_reminders(self.reminders.rows(), today, horizon_days)
    }

    pub fn create_reminder(&mut self, input: NewReminder) -> Result<Reminder> {
        self.latency.pause(Operation::Write);
        let fields = validation::validate_new_reminder(&input)?;
        if let Some(cycle_id) = input.crop_cycle_id
            && !self.cycles.contains(cycle_id)
        {
            return Err(FieldbookError::Validation(format!(
                "Reminder references unknown crop cycle {}",
                cycle_id
            )));
        }

        let now = Utc::now();
        let reminder = Reminder {
            id: 0,
            title: fields.title,
            description: input.description.unwrap_or_default(),
            reminder_date: fields.reminder_date,
            reminder_type: input.reminder_type.unwrap_or_default(),
            priority: input.priority.unwrap_or_default(),
            crop_cycle_id: input.crop_cycle_id,
            completed: false,
            completed_at: None,
            created_at: now,
            updated_at: now,
        };

        let reminder = self.reminders.insert(reminder, Placement::Front)?;
        tracing::info!(
            id = reminder.id,
            title = %reminder.title,
            date = %reminder.reminder_date,
            "Created reminder"
        );
        Ok(reminder)
    }

    pub fn update_reminder(&mut self, id: u32, update: ReminderUpdate) -> Result<Reminder> {
        self.latency.pause(Operation::Write);
        let update = validation::validate_reminder_update(update)?;
        if let Some(Some(cycle_id)) = update.crop_cycle_id
            && !self.cycles.contains(cycle_id)
        {
            return Err(FieldbookError::Validation(format!(
                "Reminder references unknown crop cycle {}",
                cycle_id
            )));
        }
        let reminder = self.reminders.get_mut(id)?;
        update.apply(reminder);
        tracing::info!(id, title = %reminder.title, "Updated reminder");
        Ok(reminder.clone())
    }

    pub fn complete_reminder(&mut self, id: u32) -> Result<Reminder> {
        self.latency.pause(Operation::Write);
        let reminder = self.reminders.get_mut(id)?;
        reminder.mark_completed();
        tracing::info!(id, title = %reminder.title, "Completed reminder");
        Ok(reminder.clone())
    }

    pub fn delete_reminder(&mut self, id: u32) -> Result<Reminder> {
        self.latency.pause(Operation::Write);
        let removed = self.reminders.remove(id)?;
        tracing::info!(id, title = %removed.title, "Deleted reminder");
        Ok(removed)
    }
}
