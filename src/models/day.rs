use crate::utils::date::{format_day, weekday_label};
use chrono::{Datelike, NaiveDate, Weekday};

/// One calendar day of a roster. Derived from the calendar, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayDescriptor {
    pub day_of_month: u32,
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub is_weekend: bool,
}

impl DayDescriptor {
    pub fn from_date(date: NaiveDate) -> Self {
        let weekday = date.weekday();
        Self {
            day_of_month: date.day(),
            date,
            weekday,
            is_weekend: is_roster_weekend(weekday),
        }
    }

    /// `YYYY-MM-DD`
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// `DD/MM/YYYY`
    pub fn display_date(&self) -> String {
        format_day(self.date)
    }

    pub fn weekday_name(&self) -> &'static str {
        weekday_label(self.weekday)
    }
}

/// Friday, Saturday and Sunday count as weekend in the roster.
pub fn is_roster_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Fri | Weekday::Sat | Weekday::Sun)
}
