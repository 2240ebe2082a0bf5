//! Planning entry model: hours one person plans on one task in one week.

use kwplan_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `planning_entries` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PlanningEntry {
    pub id: DbId,
    pub task_id: DbId,
    pub person_id: DbId,
    pub year: i32,
    pub week: i32,
    pub hours: f64,
}

/// A planning row with its task and person resolved by a join, for the
/// planning list view.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PlanningWithRefs {
    pub id: DbId,
    pub task_id: DbId,
    pub task_project: String,
    pub person_id: DbId,
    pub person_name: String,
    pub year: i32,
    pub week: i32,
    pub hours: f64,
}

/// One planning entry of the selected week reduced to what the
/// workload aggregation needs: the person (join resolved) and hours.
#[derive(Debug, Clone, FromRow)]
pub struct WeekHours {
    pub person_name: String,
    pub hours: f64,
}

/// DTO for creating a planning entry.
#[derive(Debug, Deserialize)]
pub struct CreatePlanningEntry {
    pub task_id: DbId,
    pub person_id: DbId,
    pub year: i32,
    pub week: i32,
    pub hours: f64,
}

/// DTO for editing a planning entry (full overwrite, like the form).
#[derive(Debug, Deserialize)]
pub struct UpdatePlanningEntry {
    pub task_id: DbId,
    pub person_id: DbId,
    pub year: i32,
    pub week: i32,
    pub hours: f64,
}
