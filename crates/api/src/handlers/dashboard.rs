//! Dashboard handler: the filtered task list plus, when a week is
//! selected, the per-person workload summary for that week.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use kwplan_core::error::CoreError;
use kwplan_core::types::DbId;
use kwplan_core::validation::{validate_week, validate_year};
use kwplan_core::workload::{self, PlannedHours, WorkloadSummary};
use kwplan_db::models::task::{TaskFilter, TaskWithRefs};
use kwplan_db::repositories::{PlanningRepo, TaskRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Dashboard filter parameters.
#[derive(Debug, serde::Deserialize)]
pub struct DashboardParams {
    /// Restrict tasks to this responsible person.
    pub person: Option<DbId>,
    /// Selected calendar week; requires `year`.
    pub week: Option<i32>,
    pub year: Option<i32>,
}

/// Dashboard payload.
#[derive(Debug, serde::Serialize)]
pub struct DashboardView {
    pub tasks: Vec<TaskWithRefs>,
    /// Per-person totals for the selected week; empty without a week
    /// filter. Order is unspecified.
    pub workload: Vec<WorkloadSummary>,
}

/// GET /?person=&week=&year=
///
/// The landing screen: tasks filtered by responsible and/or selected
/// week, and the workload summary when a week is selected.
pub async fn dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> AppResult<impl IntoResponse> {
    let planned_in = match (params.week, params.year) {
        (Some(week), Some(year)) => {
            validate_year(year)?;
            validate_week(week)?;
            Some((year, week))
        }
        (Some(_), None) => {
            return Err(CoreError::validation(
                "year",
                "year is required when filtering by week",
            )
            .into());
        }
        _ => None,
    };

    let filter = TaskFilter {
        responsible_id: params.person,
        planned_in,
    };
    let tasks = TaskRepo::list(&state.pool, filter).await?;

    let workload = match planned_in {
        Some((year, week)) => {
            let rows = PlanningRepo::week_hours(&state.pool, year, week).await?;
            let entries: Vec<PlannedHours> = rows
                .into_iter()
                .map(|row| PlannedHours {
                    person_name: row.person_name,
                    hours: row.hours,
                })
                .collect();
            workload::aggregate(&entries, state.config.weekly_capacity_hours)
        }
        None => Vec::new(),
    };

    Ok(Json(DataResponse {
        data: DashboardView { tasks, workload },
    }))
}
