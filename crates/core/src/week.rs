//! Calendar helpers for (year, week) planning slots.
//!
//! Week numbering follows ISO 8601: weeks start on Monday and week 1
//! contains the year's first Thursday, so week 1 may begin in the
//! previous calendar year. Tests pin this convention.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::CoreError;
use crate::validation::{validate_week, validate_year};

/// Resolve an ISO (year, week) to its Monday..Sunday calendar span.
///
/// Rejects weeks outside 1..=53 and week 53 of years that only have 52
/// ISO weeks.
pub fn week_range(year: i32, week: i32) -> Result<(NaiveDate, NaiveDate), CoreError> {
    validate_year(year)?;
    validate_week(week)?;

    let start = NaiveDate::from_isoywd_opt(year, week as u32, Weekday::Mon).ok_or_else(|| {
        CoreError::validation("week", format!("year {year} has no ISO week {week}"))
    })?;

    // Monday + 6 days is always the Sunday of the same ISO week, so the
    // addition cannot leave chrono's representable range here.
    let end = start
        .checked_add_days(Days::new(6))
        .ok_or_else(|| CoreError::Internal(format!("week span overflow for {year}-W{week}")))?;

    Ok((start, end))
}

/// Year choices offered on the planning form: previous, current, next.
pub fn planning_years(today: NaiveDate) -> Vec<i32> {
    let year = today.year();
    vec![year - 1, year, year + 1]
}
