use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::schools::models::{CreateSchool, School};
use crate::features::schools::store::SchoolStore;

/// PostgreSQL-backed school store
pub struct PgSchoolStore {
    pool: PgPool,
}

impl PgSchoolStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchoolStore for PgSchoolStore {
    async fn create(&self, data: CreateSchool) -> Result<School> {
        let school = sqlx::query_as::<_, School>(
            r#"
            INSERT INTO schools (name, address, latitude, longitude)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, address, latitude, longitude, created_at
            "#,
        )
        .bind(&data.name)
        .bind(&data.address)
        .bind(data.latitude)
        .bind(data.longitude)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create school: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(school)
    }

    async fn list_all(&self) -> Result<Vec<School>> {
        sqlx::query_as::<_, School>(
            r#"
            SELECT id, name, address, latitude, longitude, created_at
            FROM schools
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list schools: {:?}", e);
            AppError::Database(e)
        })
    }
}
