//! Repository for the `priorities` table.

use kwplan_core::types::DbId;

use crate::models::lookup::{CreateLookup, Priority, UpdateLookup};
use crate::DbPool;

/// Column list for priorities queries.
const COLUMNS: &str = "id, name, color";

/// Provides CRUD operations for priorities.
pub struct PriorityRepo;

impl PriorityRepo {
    /// List all priorities in insertion order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Priority>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM priorities ORDER BY id ASC");
        sqlx::query_as::<_, Priority>(&query).fetch_all(pool).await
    }

    /// Find a priority by ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Priority>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM priorities WHERE id = $1");
        sqlx::query_as::<_, Priority>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new priority, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateLookup) -> Result<Priority, sqlx::Error> {
        let query = format!(
            "INSERT INTO priorities (name, color) VALUES ($1, COALESCE($2, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Priority>(&query)
            .bind(&input.name)
            .bind(&input.color)
            .fetch_one(pool)
            .await
    }

    /// Update a priority by ID, returning the updated row.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateLookup,
    ) -> Result<Option<Priority>, sqlx::Error> {
        let query = format!(
            "UPDATE priorities SET name = $2, color = COALESCE($3, color)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Priority>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.color)
            .fetch_optional(pool)
            .await
    }

    /// Delete a priority by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM priorities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count tasks still referencing this priority.
    pub async fn reference_count(pool: &DbPool, id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE priority_id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
