//! First-run sample data.
//!
//! A fresh store is unusable until the lookup tables have at least one
//! row each, so the bootstrap inserts a small default set. Each table
//! is seeded independently and only while empty, which makes the call
//! idempotent and safe on every startup.

use crate::DbPool;

/// Populate empty lookup tables with the default sample set.
pub async fn seed_if_empty(pool: &DbPool) -> Result<(), sqlx::Error> {
    let persons: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM persons")
        .fetch_one(pool)
        .await?;
    if persons == 0 {
        sqlx::query("INSERT INTO persons (name) VALUES ('Alice'), ('Bob')")
            .execute(pool)
            .await?;
        tracing::info!("Seeded default persons");
    }

    let priorities: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM priorities")
        .fetch_one(pool)
        .await?;
    if priorities == 0 {
        sqlx::query(
            "INSERT INTO priorities (name, color) VALUES
             ('Low', 'success'), ('Medium', 'warning'), ('High', 'danger')",
        )
        .execute(pool)
        .await?;
        tracing::info!("Seeded default priorities");
    }

    let statuses: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM statuses")
        .fetch_one(pool)
        .await?;
    if statuses == 0 {
        sqlx::query(
            "INSERT INTO statuses (name, color) VALUES
             ('Open', 'primary'), ('In Progress', 'info'), ('Done', 'secondary')",
        )
        .execute(pool)
        .await?;
        tracing::info!("Seeded default statuses");
    }

    Ok(())
}
