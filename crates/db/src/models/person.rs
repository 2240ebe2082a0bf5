//! Person model: a team member who can own tasks and plan hours.

use kwplan_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `persons` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Person {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new person.
#[derive(Debug, Deserialize)]
pub struct CreatePerson {
    pub name: String,
}

/// DTO for renaming a person.
#[derive(Debug, Deserialize)]
pub struct UpdatePerson {
    pub name: String,
}
