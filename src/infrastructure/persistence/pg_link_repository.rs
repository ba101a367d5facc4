//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_code;

/// PostgreSQL repository for link storage and retrieval.
///
/// Uses parameterized statements throughout; the `links_code_key` unique
/// constraint carries the allocation guarantee.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn link_from_row(row: &sqlx::postgres::PgRow) -> Result<Link, sqlx::Error> {
    Ok(Link::new(
        row.try_get::<i64, _>("id")?,
        row.try_get::<String, _>("code")?,
        row.try_get::<String, _>("long_url")?,
        row.try_get::<DateTime<Utc>, _>("created_at")?,
    ))
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query(
            r#"
            INSERT INTO links (code, long_url)
            VALUES ($1, $2)
            RETURNING id, code, long_url, created_at
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.long_url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_code(&e) {
                AppError::conflict(
                    "Short code already exists",
                    serde_json::json!({ "code": new_link.code }),
                )
            } else {
                AppError::from(e)
            }
        })?;

        Ok(link_from_row(&row)?)
    }

    async fn code_exists(&self, code: &str) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM links WHERE code = $1)")
                .bind(code)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT id, code, long_url, created_at
            FROM links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.as_ref().map(link_from_row).transpose()?)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
