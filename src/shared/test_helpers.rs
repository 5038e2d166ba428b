use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::schools::models::{CreateSchool, School};
use crate::features::schools::{SchoolService, SchoolStore};

/// Build a stored school at the given coordinates
pub fn school_at(name: &str, latitude: f64, longitude: f64) -> School {
    School {
        id: Uuid::now_v7(),
        name: name.to_string(),
        address: format!("{} Street", name),
        latitude,
        longitude,
        created_at: Utc::now(),
    }
}

/// Store keeping schools in insertion order
#[derive(Default)]
pub struct InMemorySchoolStore {
    schools: RwLock<Vec<School>>,
}

impl InMemorySchoolStore {
    pub fn with_schools(schools: Vec<School>) -> Self {
        Self {
            schools: RwLock::new(schools),
        }
    }

    pub async fn snapshot(&self) -> Vec<School> {
        self.schools.read().await.clone()
    }
}

#[async_trait]
impl SchoolStore for InMemorySchoolStore {
    async fn create(&self, data: CreateSchool) -> Result<School> {
        let school = School {
            id: Uuid::now_v7(),
            name: data.name,
            address: data.address,
            latitude: data.latitude,
            longitude: data.longitude,
            created_at: Utc::now(),
        };
        self.schools.write().await.push(school.clone());
        Ok(school)
    }

    async fn list_all(&self) -> Result<Vec<School>> {
        Ok(self.snapshot().await)
    }
}

/// Store whose every call fails like an unreachable database
pub struct FailingSchoolStore;

#[async_trait]
impl SchoolStore for FailingSchoolStore {
    async fn create(&self, _data: CreateSchool) -> Result<School> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn list_all(&self) -> Result<Vec<School>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }
}

/// Test server over the public API routes backed by `store`
pub fn test_server(store: Arc<dyn SchoolStore>) -> TestServer {
    let service = Arc::new(SchoolService::new(store));
    TestServer::new(crate::api_routes(service)).unwrap()
}
