//! Repository for the `statuses` table.

use kwplan_core::types::DbId;

use crate::models::lookup::{CreateLookup, Status, UpdateLookup};
use crate::DbPool;

/// Column list for statuses queries.
const COLUMNS: &str = "id, name, color";

/// Provides CRUD operations for statuses.
pub struct StatusRepo;

impl StatusRepo {
    /// List all statuses in insertion order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Status>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM statuses ORDER BY id ASC");
        sqlx::query_as::<_, Status>(&query).fetch_all(pool).await
    }

    /// Find a status by ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Status>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM statuses WHERE id = $1");
        sqlx::query_as::<_, Status>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new status, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateLookup) -> Result<Status, sqlx::Error> {
        let query = format!(
            "INSERT INTO statuses (name, color) VALUES ($1, COALESCE($2, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Status>(&query)
            .bind(&input.name)
            .bind(&input.color)
            .fetch_one(pool)
            .await
    }

    /// Update a status by ID, returning the updated row.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateLookup,
    ) -> Result<Option<Status>, sqlx::Error> {
        let query = format!(
            "UPDATE statuses SET name = $2, color = COALESCE($3, color)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Status>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.color)
            .fetch_optional(pool)
            .await
    }

    /// Delete a status by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM statuses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count tasks still referencing this status.
    pub async fn reference_count(pool: &DbPool, id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE status_id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
