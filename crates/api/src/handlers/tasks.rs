//! Handlers for the task screens: list, create, edit, delete.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use kwplan_core::error::CoreError;
use kwplan_core::types::DbId;
use kwplan_core::validation::validate_required;
use kwplan_db::models::task::{CreateTask, TaskFilter, UpdateTask};
use kwplan_db::repositories::TaskRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /tasks
///
/// List all tasks with referenced names resolved.
pub async fn list_tasks(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tasks = TaskRepo::list(&state.pool, TaskFilter::default()).await?;
    Ok(Json(DataResponse { data: tasks }))
}

/// POST /tasks
///
/// Create a new task. `project` and `description` are required fields
/// and checked before any persistence attempt.
pub async fn create_task(
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> AppResult<impl IntoResponse> {
    validate_required("project", &input.project)?;
    validate_required("description", &input.description)?;

    let task = TaskRepo::create(&state.pool, &input).await?;

    tracing::info!(task_id = task.id, project = %task.project, "Task created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: task })))
}

/// GET /tasks/{id}
///
/// Get a single task by ID.
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Task", id })?;

    Ok(Json(DataResponse { data: task }))
}

/// PUT /tasks/{id}
///
/// Overwrite all mutable fields of a task with the submitted form.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTask>,
) -> AppResult<impl IntoResponse> {
    validate_required("project", &input.project)?;
    validate_required("description", &input.description)?;

    let task = TaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Task", id })?;

    tracing::info!(task_id = id, "Task updated");

    Ok(Json(DataResponse { data: task }))
}

/// DELETE /tasks/{id}
///
/// Delete a task and its planning entries.
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TaskRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(CoreError::NotFound { entity: "Task", id }.into());
    }

    tracing::info!(task_id = id, "Task deleted");

    Ok(StatusCode::NO_CONTENT)
}
