use crate::core::calendar;
use crate::errors::{AppError, AppResult};
use crate::models::day::DayDescriptor;
use crate::models::shift::{ShiftAssignment, Slot};
use crate::models::snapshot::{Snapshot, SnapshotRow};
use crate::utils::date::month_name;

/// One calendar row of a roster: the derived day plus its assignments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterDay {
    pub day: DayDescriptor,
    pub shifts: ShiftAssignment,
}

/// One month's roster.
///
/// `days` always has exactly one entry per calendar day of (`year`, `month`),
/// in calendar order. The fields are private so that invariant holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    year: i32,
    month: u32,
    days: Vec<RosterDay>,
}

impl Schedule {
    /// Empty roster for the given month.
    pub fn blank(year: i32, month: u32) -> AppResult<Self> {
        let days = calendar::generate(year, month)?
            .into_iter()
            .map(|day| RosterDay {
                day,
                shifts: ShiftAssignment::default(),
            })
            .collect();

        Ok(Self { year, month, days })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn month_name(&self) -> &'static str {
        // month is validated by calendar::generate at construction
        month_name(self.month).unwrap_or("")
    }

    pub fn days(&self) -> &[RosterDay] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Assignments of day `day_of_month` (1-based).
    pub fn shifts(&self, day_of_month: u32) -> Option<&ShiftAssignment> {
        self.index_of(day_of_month).map(|i| &self.days[i].shifts)
    }

    /// Writes one cell, as the editor does on every edit.
    pub fn set_shift(&mut self, day_of_month: u32, slot: Slot, value: &str) -> AppResult<()> {
        let idx = self.index_of(day_of_month).ok_or_else(|| {
            AppError::InvalidDate(format!(
                "day {day_of_month} is not in {:02}/{}",
                self.month, self.year
            ))
        })?;

        self.days[idx].shifts.set(slot, value);
        Ok(())
    }

    fn index_of(&self, day_of_month: u32) -> Option<usize> {
        let idx = (day_of_month as usize).checked_sub(1)?;
        (idx < self.days.len()).then_some(idx)
    }

    /// Flattened on-disk projection.
    pub fn to_snapshot(&self) -> Snapshot {
        let escalas = self
            .days
            .iter()
            .map(|r| SnapshotRow {
                data: r.day.display_date(),
                dia_semana: r.day.weekday_name().to_string(),
                noite: r.shifts.night.clone(),
                tarde: r.shifts.afternoon.clone(),
                manha: r.shifts.morning.clone(),
            })
            .collect();

        Snapshot {
            mes: self.month,
            ano: self.year,
            escalas,
        }
    }

    /// Rebuilds a roster from a snapshot.
    ///
    /// Rows come from the calendar for (`mes`, `ano`); shift strings are copied
    /// by position. Stored `data`/`dia_semana` are ignored. Snapshot rows beyond
    /// the month length are dropped, missing rows stay blank.
    pub fn from_snapshot(snapshot: &Snapshot) -> AppResult<Self> {
        let mut schedule = Self::blank(snapshot.ano, snapshot.mes)?;

        for (row, stored) in schedule.days.iter_mut().zip(snapshot.escalas.iter()) {
            row.shifts = ShiftAssignment::new(&stored.noite, &stored.tarde, &stored.manha);
        }

        Ok(schedule)
    }
}
