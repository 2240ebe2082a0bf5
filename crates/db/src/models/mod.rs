//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO for full-form edits
//!
//! List endpoints that display related rows use explicit `*WithRefs`
//! structs populated by a join in the repository, never per-row lookups.

pub mod lookup;
pub mod person;
pub mod planning;
pub mod task;
