//! Handlers for the masterdata/settings screen.
//!
//! Persons, priorities, and statuses share the screen; every operation
//! dispatches on an explicit [`LookupKind`] tag. Persons carry no
//! color, so a submitted color is ignored for them.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use kwplan_core::error::CoreError;
use kwplan_core::types::DbId;
use kwplan_core::validation::validate_required;
use kwplan_db::models::lookup::{CreateLookup, LookupKind, Priority, Status, UpdateLookup};
use kwplan_db::models::person::{CreatePerson, Person, UpdatePerson};
use kwplan_db::repositories::{PersonRepo, PriorityRepo, StatusRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// All masterdata sets in one payload; every screen of the planner
/// offers the full lookup selection.
#[derive(Debug, Serialize)]
pub struct SettingsView {
    pub persons: Vec<Person>,
    pub priorities: Vec<Priority>,
    pub statuses: Vec<Status>,
}

/// Form fields for the inline masterdata create/edit: the target table
/// tag plus the shared `{name, color?}` shape.
#[derive(Debug, Deserialize)]
pub struct MasterdataForm {
    pub kind: LookupKind,
    pub name: String,
    pub color: Option<String>,
}

/// A created or updated masterdata row, whichever table it came from.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MasterdataRow {
    Person(Person),
    Priority(Priority),
    Status(Status),
}

/// GET /settings
///
/// List all masterdata rows.
pub async fn list_settings(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let persons = PersonRepo::list(&state.pool).await?;
    let priorities = PriorityRepo::list(&state.pool).await?;
    let statuses = StatusRepo::list(&state.pool).await?;

    Ok(Json(DataResponse {
        data: SettingsView {
            persons,
            priorities,
            statuses,
        },
    }))
}

/// POST /settings
///
/// Create a masterdata row in the table selected by `kind`.
pub async fn create_masterdata(
    State(state): State<AppState>,
    Json(form): Json<MasterdataForm>,
) -> AppResult<impl IntoResponse> {
    validate_required("name", &form.name)?;

    let row = match form.kind {
        LookupKind::Person => {
            let input = CreatePerson { name: form.name };
            MasterdataRow::Person(PersonRepo::create(&state.pool, &input).await?)
        }
        LookupKind::Priority => {
            let input = CreateLookup {
                name: form.name,
                color: form.color,
            };
            MasterdataRow::Priority(PriorityRepo::create(&state.pool, &input).await?)
        }
        LookupKind::Status => {
            let input = CreateLookup {
                name: form.name,
                color: form.color,
            };
            MasterdataRow::Status(StatusRepo::create(&state.pool, &input).await?)
        }
    };

    tracing::info!(kind = ?form.kind, "Masterdata row created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: row })))
}

/// Form fields for editing a masterdata row (kind comes from the path).
#[derive(Debug, Deserialize)]
pub struct MasterdataEditForm {
    pub name: String,
    pub color: Option<String>,
}

/// PUT /settings/{kind}/{id}
///
/// Edit a masterdata row.
pub async fn update_masterdata(
    State(state): State<AppState>,
    Path((kind, id)): Path<(LookupKind, DbId)>,
    Json(form): Json<MasterdataEditForm>,
) -> AppResult<impl IntoResponse> {
    validate_required("name", &form.name)?;

    let not_found = || CoreError::NotFound {
        entity: kind.entity_name(),
        id,
    };

    let row = match kind {
        LookupKind::Person => {
            let input = UpdatePerson { name: form.name };
            let person = PersonRepo::update(&state.pool, id, &input)
                .await?
                .ok_or_else(not_found)?;
            MasterdataRow::Person(person)
        }
        LookupKind::Priority => {
            let input = UpdateLookup {
                name: form.name,
                color: form.color,
            };
            let priority = PriorityRepo::update(&state.pool, id, &input)
                .await?
                .ok_or_else(not_found)?;
            MasterdataRow::Priority(priority)
        }
        LookupKind::Status => {
            let input = UpdateLookup {
                name: form.name,
                color: form.color,
            };
            let status = StatusRepo::update(&state.pool, id, &input)
                .await?
                .ok_or_else(not_found)?;
            MasterdataRow::Status(status)
        }
    };

    tracing::info!(kind = ?kind, id, "Masterdata row updated");

    Ok(Json(DataResponse { data: row }))
}

/// DELETE /settings/{kind}/{id}
///
/// Delete a masterdata row. Rejected with a conflict while tasks or
/// planning entries still reference the row.
pub async fn delete_masterdata(
    State(state): State<AppState>,
    Path((kind, id)): Path<(LookupKind, DbId)>,
) -> AppResult<impl IntoResponse> {
    let references = match kind {
        LookupKind::Person => PersonRepo::reference_count(&state.pool, id).await?,
        LookupKind::Priority => PriorityRepo::reference_count(&state.pool, id).await?,
        LookupKind::Status => StatusRepo::reference_count(&state.pool, id).await?,
    };
    if references > 0 {
        return Err(CoreError::Conflict(format!(
            "{} {id} is still referenced by {references} row(s)",
            kind.entity_name()
        ))
        .into());
    }

    let deleted = match kind {
        LookupKind::Person => PersonRepo::delete(&state.pool, id).await?,
        LookupKind::Priority => PriorityRepo::delete(&state.pool, id).await?,
        LookupKind::Status => StatusRepo::delete(&state.pool, id).await?,
    };

    if !deleted {
        return Err(CoreError::NotFound {
            entity: kind.entity_name(),
            id,
        }
        .into());
    }

    tracing::info!(kind = ?kind, id, "Masterdata row deleted");

    Ok(StatusCode::NO_CONTENT)
}
