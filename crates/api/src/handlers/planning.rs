//! Handlers for the planning screens: weekly hour entries per person
//! and task, plus the form context (year choices and the week's
//! calendar span).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;

use kwplan_core::error::CoreError;
use kwplan_core::types::DbId;
use kwplan_core::validation::{validate_hours, validate_week, validate_year};
use kwplan_core::week::{planning_years, week_range};
use kwplan_db::models::planning::{CreatePlanningEntry, UpdatePlanningEntry};
use kwplan_db::repositories::{PersonRepo, PlanningRepo, TaskRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /planning
///
/// List all planning entries with task and person resolved.
pub async fn list_entries(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let entries = PlanningRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// POST /planning
///
/// Create a planning entry. Week, year, and hours are range-checked
/// and the referenced task and person must exist; both checks run
/// before any persistence attempt.
pub async fn create_entry(
    State(state): State<AppState>,
    Json(input): Json<CreatePlanningEntry>,
) -> AppResult<impl IntoResponse> {
    validate_year(input.year)?;
    validate_week(input.week)?;
    validate_hours(input.hours)?;
    validate_references(&state, input.task_id, input.person_id).await?;

    let entry = PlanningRepo::create(&state.pool, &input).await?;

    tracing::info!(
        entry_id = entry.id,
        task_id = entry.task_id,
        person_id = entry.person_id,
        year = entry.year,
        week = entry.week,
        hours = entry.hours,
        "Planning entry created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}

/// GET /planning/{id}
///
/// Get a single planning entry by ID.
pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let entry = PlanningRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "PlanningEntry",
            id,
        })?;

    Ok(Json(DataResponse { data: entry }))
}

/// PUT /planning/{id}
///
/// Overwrite all fields of a planning entry with the submitted form.
pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePlanningEntry>,
) -> AppResult<impl IntoResponse> {
    validate_year(input.year)?;
    validate_week(input.week)?;
    validate_hours(input.hours)?;
    validate_references(&state, input.task_id, input.person_id).await?;

    let entry = PlanningRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "PlanningEntry",
            id,
        })?;

    tracing::info!(entry_id = id, "Planning entry updated");

    Ok(Json(DataResponse { data: entry }))
}

/// DELETE /planning/{id}
///
/// Delete a planning entry.
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PlanningRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(CoreError::NotFound {
            entity: "PlanningEntry",
            id,
        }
        .into());
    }

    tracing::info!(entry_id = id, "Planning entry deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Form context
// ---------------------------------------------------------------------------

/// Query parameters for the planning form context.
#[derive(Debug, serde::Deserialize)]
pub struct FormContextParams {
    pub year: Option<i32>,
    pub week: Option<i32>,
}

/// Monday..Sunday span of the selected week, for display next to the
/// week-number field.
#[derive(Debug, serde::Serialize)]
pub struct WeekSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Context the planning form needs before submission.
#[derive(Debug, serde::Serialize)]
pub struct FormContext {
    /// Year choices: previous, current, next.
    pub years: Vec<i32>,
    /// Present when the request carried a valid (year, week) pair.
    pub range: Option<WeekSpan>,
}

/// GET /planning/form-context?year=&week=
///
/// Year choices for the form and, when both parameters are given, the
/// calendar span of that week.
pub async fn form_context(
    Query(params): Query<FormContextParams>,
) -> AppResult<impl IntoResponse> {
    let years = planning_years(chrono::Utc::now().date_naive());

    let range = match (params.year, params.week) {
        (Some(year), Some(week)) => {
            let (start, end) = week_range(year, week)?;
            Some(WeekSpan { start, end })
        }
        _ => None,
    };

    Ok(Json(DataResponse {
        data: FormContext { years, range },
    }))
}

/// A planning entry must point at an existing task and person; the
/// store itself would accept dangling ids silently.
async fn validate_references(
    state: &AppState,
    task_id: DbId,
    person_id: DbId,
) -> AppResult<()> {
    if TaskRepo::find_by_id(&state.pool, task_id).await?.is_none() {
        return Err(CoreError::validation("task_id", format!("no task with id {task_id}")).into());
    }
    if PersonRepo::find_by_id(&state.pool, person_id)
        .await?
        .is_none()
    {
        return Err(
            CoreError::validation("person_id", format!("no person with id {person_id}")).into(),
        );
    }
    Ok(())
}
