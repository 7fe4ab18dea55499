//! Calendar generation: one descriptor per day of a (year, month).

use crate::errors::{AppError, AppResult};
use crate::models::day::DayDescriptor;
use chrono::{Datelike, NaiveDate};

/// Builds the ordered day descriptors for `month`/`year`.
///
/// Rows come out ascending by day of month; every other component uses this
/// order as the canonical row order.
pub fn generate(year: i32, month: u32) -> AppResult<Vec<DayDescriptor>> {
    if !(1..=12).contains(&month) {
        return Err(AppError::InvalidDate(format!(
            "month {month} is outside 1-12"
        )));
    }

    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::InvalidDate(format!("{month:02}/{year}")))?;

    let mut out = Vec::with_capacity(31);
    let mut d = first;

    while d.month() == month {
        out.push(DayDescriptor::from_date(d));
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    Ok(out)
}

/// Gregorian days-in-month.
pub fn days_in_month(year: i32, month: u32) -> AppResult<u32> {
    Ok(generate(year, month)?.len() as u32)
}
