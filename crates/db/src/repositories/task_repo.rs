//! Repository for the `tasks` table.

use kwplan_core::types::DbId;

use crate::models::task::{CreateTask, Task, TaskFilter, TaskWithRefs, UpdateTask};
use crate::DbPool;

/// Column list for plain tasks queries.
const COLUMNS: &str = "id, project, description, responsible_id, priority_id, status_id, due_date";

/// Column list for the joined list view. LEFT JOINs keep tasks with
/// dangling or absent references visible (their names come back NULL).
const JOINED_COLUMNS: &str = "t.id, t.project, t.description,
    t.responsible_id, pe.name AS responsible_name,
    t.priority_id, pr.name AS priority_name, pr.color AS priority_color,
    t.status_id, st.name AS status_name, st.color AS status_color,
    t.due_date";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// List tasks with referenced names resolved, optionally filtered
    /// by responsible person and/or by having a planning entry in a
    /// given (year, week).
    pub async fn list(
        pool: &DbPool,
        filter: TaskFilter,
    ) -> Result<Vec<TaskWithRefs>, sqlx::Error> {
        let (year, week) = match filter.planned_in {
            Some((year, week)) => (Some(year), Some(week)),
            None => (None, None),
        };
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM tasks t
             LEFT JOIN persons pe ON pe.id = t.responsible_id
             LEFT JOIN priorities pr ON pr.id = t.priority_id
             LEFT JOIN statuses st ON st.id = t.status_id
             WHERE ($1 IS NULL OR t.responsible_id = $1)
               AND ($2 IS NULL OR t.id IN
                    (SELECT task_id FROM planning_entries WHERE year = $2 AND week = $3))
             ORDER BY t.id ASC"
        );
        sqlx::query_as::<_, TaskWithRefs>(&query)
            .bind(filter.responsible_id)
            .bind(year)
            .bind(week)
            .fetch_all(pool)
            .await
    }

    /// Find a task by ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new task, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (project, description, responsible_id, priority_id, status_id, due_date)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&input.project)
            .bind(&input.description)
            .bind(input.responsible_id)
            .bind(input.priority_id)
            .bind(input.status_id)
            .bind(input.due_date)
            .fetch_one(pool)
            .await
    }

    /// Overwrite all mutable fields of a task, returning the updated
    /// row. Absent references are cleared, matching the edit form.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                project = $2,
                description = $3,
                responsible_id = $4,
                priority_id = $5,
                status_id = $6,
                due_date = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.project)
            .bind(&input.description)
            .bind(input.responsible_id)
            .bind(input.priority_id)
            .bind(input.status_id)
            .bind(input.due_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task and its planning entries in one transaction.
    /// Returns `true` if the task existed.
    ///
    /// A planning entry without its task would break the workload join,
    /// so the dangling-reference tolerance does not apply here.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM planning_entries WHERE task_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
