//! Task model.

use chrono::NaiveDate;
use kwplan_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tasks` table.
///
/// The reference columns are plain ids; dangling values (a deleted
/// lookup row) are tolerated by the data layer and surface as `None`
/// names in [`TaskWithRefs`].
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Task {
    pub id: DbId,
    pub project: String,
    pub description: String,
    pub responsible_id: Option<DbId>,
    pub priority_id: Option<DbId>,
    pub status_id: Option<DbId>,
    pub due_date: Option<NaiveDate>,
}

/// A task row with its referenced names resolved by a LEFT JOIN, for
/// list and dashboard views.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TaskWithRefs {
    pub id: DbId,
    pub project: String,
    pub description: String,
    pub responsible_id: Option<DbId>,
    pub responsible_name: Option<String>,
    pub priority_id: Option<DbId>,
    pub priority_name: Option<String>,
    pub priority_color: Option<String>,
    pub status_id: Option<DbId>,
    pub status_name: Option<String>,
    pub status_color: Option<String>,
    pub due_date: Option<NaiveDate>,
}

/// DTO for creating a new task. Absent references stay NULL.
#[derive(Debug, Deserialize)]
pub struct CreateTask {
    pub project: String,
    pub description: String,
    pub responsible_id: Option<DbId>,
    pub priority_id: Option<DbId>,
    pub status_id: Option<DbId>,
    pub due_date: Option<NaiveDate>,
}

/// DTO for editing a task. The edit form submits every mutable field,
/// so the update is a full overwrite; omitting a reference clears it.
#[derive(Debug, Deserialize)]
pub struct UpdateTask {
    pub project: String,
    pub description: String,
    pub responsible_id: Option<DbId>,
    pub priority_id: Option<DbId>,
    pub status_id: Option<DbId>,
    pub due_date: Option<NaiveDate>,
}

/// Dashboard task filters: by responsible person and/or by having a
/// planning entry in a concrete (year, week).
#[derive(Debug, Default, Clone, Copy)]
pub struct TaskFilter {
    pub responsible_id: Option<DbId>,
    pub planned_in: Option<(i32, i32)>,
}
