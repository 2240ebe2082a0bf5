//! Field-level input validation.
//!
//! Every check runs before any persistence attempt so a bad form field
//! comes back as a `Validation` error naming the field instead of a
//! storage-layer failure.

use crate::error::CoreError;

/// Planning weeks are 1..=53 (53 only in long ISO years, checked later
/// against the concrete year by `week::week_range`).
pub const MIN_WEEK: i32 = 1;
pub const MAX_WEEK: i32 = 53;

/// A required text field must be non-empty after trimming.
pub fn validate_required(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(field, "must not be empty"));
    }
    Ok(())
}

pub fn validate_week(week: i32) -> Result<(), CoreError> {
    if !(MIN_WEEK..=MAX_WEEK).contains(&week) {
        return Err(CoreError::validation(
            "week",
            format!("must be between {MIN_WEEK} and {MAX_WEEK}, got {week}"),
        ));
    }
    Ok(())
}

pub fn validate_year(year: i32) -> Result<(), CoreError> {
    if !(1..=9999).contains(&year) {
        return Err(CoreError::validation(
            "year",
            format!("must be between 1 and 9999, got {year}"),
        ));
    }
    Ok(())
}

/// Planned hours must be a finite, non-negative number.
pub fn validate_hours(hours: f64) -> Result<(), CoreError> {
    if !hours.is_finite() {
        return Err(CoreError::validation("hours", "must be a finite number"));
    }
    if hours < 0.0 {
        return Err(CoreError::validation(
            "hours",
            format!("must not be negative, got {hours}"),
        ));
    }
    Ok(())
}
