use async_trait::async_trait;
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use super::{AdminDirectory, AdminSeed};

/// Row in `users`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub status: String,
}

#[async_trait]
impl AdminDirectory for PgPool {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, role, status
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self)
        .await?;
        Ok(user)
    }

    async fn insert(&self, seed: &AdminSeed) -> anyhow::Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (name, email, password_hash, role, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&seed.name)
        .bind(&seed.email)
        .bind(&seed.password_hash)
        .bind(super::ROLE)
        .bind(super::STATUS)
        .fetch_one(self)
        .await?;
        Ok(id)
    }
}
