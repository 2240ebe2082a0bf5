//! Repository for the `planning_entries` table.

use kwplan_core::types::DbId;

use crate::models::planning::{
    CreatePlanningEntry, PlanningEntry, PlanningWithRefs, UpdatePlanningEntry, WeekHours,
};
use crate::DbPool;

/// Column list for planning queries.
const COLUMNS: &str = "id, task_id, person_id, year, week, hours";

/// Column list for the joined list view. INNER JOINs: task and person
/// are required references.
const JOINED_COLUMNS: &str = "p.id, p.task_id, t.project AS task_project,
    p.person_id, pe.name AS person_name, p.year, p.week, p.hours";

/// Provides CRUD operations for planning entries.
pub struct PlanningRepo;

impl PlanningRepo {
    /// List all planning entries with task and person resolved.
    pub async fn list(pool: &DbPool) -> Result<Vec<PlanningWithRefs>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM planning_entries p
             JOIN tasks t ON t.id = p.task_id
             JOIN persons pe ON pe.id = p.person_id
             ORDER BY p.id ASC"
        );
        sqlx::query_as::<_, PlanningWithRefs>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a planning entry by ID.
    pub async fn find_by_id(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<PlanningEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planning_entries WHERE id = $1");
        sqlx::query_as::<_, PlanningEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new planning entry, returning the created row.
    pub async fn create(
        pool: &DbPool,
        input: &CreatePlanningEntry,
    ) -> Result<PlanningEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO planning_entries (task_id, person_id, year, week, hours)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PlanningEntry>(&query)
            .bind(input.task_id)
            .bind(input.person_id)
            .bind(input.year)
            .bind(input.week)
            .bind(input.hours)
            .fetch_one(pool)
            .await
    }

    /// Overwrite all fields of a planning entry, returning the updated row.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdatePlanningEntry,
    ) -> Result<Option<PlanningEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE planning_entries SET
                task_id = $2,
                person_id = $3,
                year = $4,
                week = $5,
                hours = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PlanningEntry>(&query)
            .bind(id)
            .bind(input.task_id)
            .bind(input.person_id)
            .bind(input.year)
            .bind(input.week)
            .bind(input.hours)
            .fetch_optional(pool)
            .await
    }

    /// Delete a planning entry by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM planning_entries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Fetch (person name, hours) pairs for every entry in the given
    /// (year, week), as input to the workload aggregation.
    pub async fn week_hours(
        pool: &DbPool,
        year: i32,
        week: i32,
    ) -> Result<Vec<WeekHours>, sqlx::Error> {
        sqlx::query_as::<_, WeekHours>(
            "SELECT pe.name AS person_name, p.hours
             FROM planning_entries p
             JOIN persons pe ON pe.id = p.person_id
             WHERE p.year = $1 AND p.week = $2",
        )
        .bind(year)
        .bind(week)
        .fetch_all(pool)
        .await
    }
}
