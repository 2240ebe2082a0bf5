//! Repository for the `persons` table.

use kwplan_core::types::DbId;

use crate::models::person::{CreatePerson, Person, UpdatePerson};
use crate::DbPool;

/// Column list for persons queries.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for persons.
pub struct PersonRepo;

impl PersonRepo {
    /// List all persons in insertion order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM persons ORDER BY id ASC");
        sqlx::query_as::<_, Person>(&query).fetch_all(pool).await
    }

    /// Find a person by ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM persons WHERE id = $1");
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new person, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreatePerson) -> Result<Person, sqlx::Error> {
        let query = format!("INSERT INTO persons (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Person>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Rename a person by ID, returning the updated row.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdatePerson,
    ) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("UPDATE persons SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a person by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM persons WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count rows still referencing this person (task responsibility
    /// and planning entries). Non-zero forbids deletion.
    pub async fn reference_count(pool: &DbPool, id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT (SELECT COUNT(*) FROM tasks WHERE responsible_id = $1)
                  + (SELECT COUNT(*) FROM planning_entries WHERE person_id = $1)",
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }
}
