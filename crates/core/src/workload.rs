//! Per-person weekly workload aggregation.
//!
//! Sums the planned hours of every person with at least one planning
//! entry in the selected week and flags anyone above the weekly
//! capacity threshold. Pure fold over rows the caller has already
//! filtered to a single (year, week).

use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Capacity threshold
// ---------------------------------------------------------------------------

/// Standard full-time weekly hours. Overridable via `WEEKLY_CAPACITY_HOURS`.
pub const DEFAULT_WEEKLY_CAPACITY_HOURS: f64 = 38.5;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One person's planned hours on one task in one week, as handed over
/// by the db layer (person join already resolved).
#[derive(Debug, Clone)]
pub struct PlannedHours {
    pub person_name: String,
    pub hours: f64,
}

/// Aggregated weekly load for one person.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct WorkloadSummary {
    pub person_name: String,
    pub total_hours: f64,
    /// True when `total_hours` strictly exceeds the capacity threshold.
    pub over: bool,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Sum planned hours per distinct person and flag overload.
///
/// Persons without entries do not appear in the result. Totals at
/// exactly `capacity` are not flagged. Result order is unspecified;
/// callers and tests must treat it as a set.
pub fn aggregate(entries: &[PlannedHours], capacity: f64) -> Vec<WorkloadSummary> {
    let mut by_person: HashMap<&str, f64> = HashMap::new();
    for entry in entries {
        *by_person.entry(entry.person_name.as_str()).or_insert(0.0) += entry.hours;
    }

    by_person
        .into_iter()
        .map(|(name, total)| WorkloadSummary {
            person_name: name.to_string(),
            total_hours: total,
            over: total > capacity,
        })
        .collect()
}
