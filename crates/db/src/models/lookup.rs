//! Lookup entities: priorities and statuses.
//!
//! Both are user-editable labels with a display color, not fixed code
//! enums; a task's status can be set to any existing value at any time.
//! `LookupKind` is the explicit tag the masterdata screen dispatches
//! on (persons share the screen but carry no color).

use kwplan_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `priorities` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Priority {
    pub id: DbId,
    pub name: String,
    pub color: String,
}

/// A row from the `statuses` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Status {
    pub id: DbId,
    pub name: String,
    pub color: String,
}

/// DTO for creating a priority or status.
#[derive(Debug, Deserialize)]
pub struct CreateLookup {
    pub name: String,
    /// Display tag, free text. Defaults to empty.
    pub color: Option<String>,
}

/// DTO for editing a priority or status.
#[derive(Debug, Deserialize)]
pub struct UpdateLookup {
    pub name: String,
    pub color: Option<String>,
}

/// Which masterdata table a settings operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupKind {
    Person,
    Priority,
    Status,
}

impl LookupKind {
    /// Entity name used in not-found errors and logs.
    pub fn entity_name(self) -> &'static str {
        match self {
            Self::Person => "Person",
            Self::Priority => "Priority",
            Self::Status => "Status",
        }
    }
}
