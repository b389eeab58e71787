//! Reflection ledger storage, always scoped to the owning user.

use sqlx::SqlitePool;
use uuid::Uuid;

use journal_core::{Categories, Reflection};

use crate::error::{DatabaseError, Result};
use crate::models::ReflectionRow;

/// Insert a reflection and return it with its assigned id and timestamp.
pub async fn create_reflection(
    pool: &SqlitePool,
    owner_email: &str,
    content: &str,
    mood: Option<&str>,
    categories: &Categories,
) -> Result<Reflection> {
    let id = Uuid::new_v4().to_string();
    let categories = serde_json::to_string(categories)?;

    let row = sqlx::query_as::<_, ReflectionRow>(
        r#"
        INSERT INTO reflections (id, owner_email, content, mood, categories)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, owner_email, content, mood, categories, created_at
        "#,
    )
    .bind(&id)
    .bind(owner_email)
    .bind(content)
    .bind(mood)
    .bind(&categories)
    .fetch_one(pool)
    .await?;

    row.into_reflection()
}

/// All reflections of an owner, most recent first.
pub async fn list_reflections(pool: &SqlitePool, owner_email: &str) -> Result<Vec<Reflection>> {
    let rows = sqlx::query_as::<_, ReflectionRow>(
        r#"
        SELECT id, owner_email, content, mood, categories, created_at
        FROM reflections
        WHERE owner_email = ?
        ORDER BY created_at DESC, rowid DESC
        "#,
    )
    .bind(owner_email)
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(ReflectionRow::into_reflection).collect()
}

/// The `limit` most recent reflections of an owner, most recent first.
pub async fn recent_reflections(
    pool: &SqlitePool,
    owner_email: &str,
    limit: i64,
) -> Result<Vec<Reflection>> {
    let rows = sqlx::query_as::<_, ReflectionRow>(
        r#"
        SELECT id, owner_email, content, mood, categories, created_at
        FROM reflections
        WHERE owner_email = ?
        ORDER BY created_at DESC, rowid DESC
        LIMIT ?
        "#,
    )
    .bind(owner_email)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(ReflectionRow::into_reflection).collect()
}

/// Delete a reflection owned by `owner_email`.
///
/// An id owned by someone else yields the same `NotFound` as an id that
/// does not exist.
pub async fn delete_reflection(pool: &SqlitePool, owner_email: &str, id: &str) -> Result<()> {
    let result = sqlx::query(
        r#"
        DELETE FROM reflections
        WHERE id = ? AND owner_email = ?
        "#,
    )
    .bind(id)
    .bind(owner_email)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Reflection",
            id: id.to_string(),
        });
    }

    Ok(())
}
