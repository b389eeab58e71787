//! User persistence.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::User;

/// Create a new user.
///
/// Email uniqueness is enforced by the primary key, so two concurrent
/// signups for the same address cannot both succeed.
pub async fn create_user(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<User> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, name, password_hash)
        VALUES (?, ?, ?)
        RETURNING email, name, password_hash, created_at
        "#,
    )
    .bind(email)
    .bind(name)
    .bind(password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return DatabaseError::AlreadyExists {
                    entity: "User",
                    id: email.to_string(),
                };
            }
        }
        DatabaseError::Sqlx(e)
    })
}

/// Get a user by email.
pub async fn get_user(pool: &SqlitePool, email: &str) -> Result<User> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT email, name, password_hash, created_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "User",
        id: email.to_string(),
    })
}
