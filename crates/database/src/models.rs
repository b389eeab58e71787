//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use journal_core::{Categories, Reflection};

use crate::error::Result;

/// A registered user, identified by email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Email address, unique and compared as stored.
    pub email: String,
    /// Display name
    pub name: String,
    /// bcrypt hash of the password. Never leaves the server.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Creation timestamp.
    pub created_at: String,
}

/// A reflection row as stored; categories are a JSON object column.
#[derive(Debug, Clone, FromRow)]
pub(crate) struct ReflectionRow {
    pub id: String,
    pub owner_email: String,
    pub content: String,
    pub mood: Option<String>,
    pub categories: String,
    pub created_at: String,
}

impl ReflectionRow {
    pub(crate) fn into_reflection(self) -> Result<Reflection> {
        let categories: Categories = serde_json::from_str(&self.categories)?;
        Ok(Reflection {
            id: self.id,
            owner_email: self.owner_email,
            content: self.content,
            mood: self.mood,
            categories,
            created_at: self.created_at,
        })
    }
}
