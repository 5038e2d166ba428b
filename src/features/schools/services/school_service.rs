use std::sync::Arc;

use crate::core::error::Result;
use crate::features::schools::dtos::{RankedSchoolDto, SchoolResponseDto};
use crate::features::schools::models::CreateSchool;
use crate::features::schools::services::rank_by_proximity;
use crate::features::schools::SchoolStore;
use crate::shared::geo::Coordinates;

/// Service for school operations
pub struct SchoolService {
    store: Arc<dyn SchoolStore>,
}

impl SchoolService {
    pub fn new(store: Arc<dyn SchoolStore>) -> Self {
        Self { store }
    }

    /// Persist a new school
    pub async fn create(&self, data: CreateSchool) -> Result<SchoolResponseDto> {
        let school = self.store.create(data).await?;

        tracing::info!(
            "School created: id={}, name={:?}, at ({}, {})",
            school.id,
            school.name,
            school.latitude,
            school.longitude
        );

        Ok(school.into())
    }

    /// List every school ordered by distance from `origin`.
    ///
    /// Full scan and in-memory sort on each call.
    pub async fn list_by_proximity(&self, origin: Coordinates) -> Result<Vec<RankedSchoolDto>> {
        let schools = self.store.list_all().await?;
        let ranked = rank_by_proximity(origin, schools);

        tracing::debug!(
            "Ranked {} schools from ({}, {})",
            ranked.len(),
            origin.latitude,
            origin.longitude
        );

        Ok(ranked.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::shared::test_helpers::{school_at, FailingSchoolStore, InMemorySchoolStore};

    #[tokio::test]
    async fn test_create_echoes_input() {
        let service = SchoolService::new(Arc::new(InMemorySchoolStore::default()));

        let created = service
            .create(CreateSchool {
                name: "North High".to_string(),
                address: "1 North Rd".to_string(),
                latitude: 10.0,
                longitude: 20.0,
            })
            .await
            .unwrap();

        assert_eq!(created.name, "North High");
        assert_eq!(created.address, "1 North Rd");
        assert_eq!(created.latitude, 10.0);
        assert_eq!(created.longitude, 20.0);
    }

    #[tokio::test]
    async fn test_list_by_proximity_orders_results() {
        let store = InMemorySchoolStore::with_schools(vec![
            school_at("Far", 0.0, 1.0),
            school_at("Near", 0.0, 0.0),
        ]);
        let service = SchoolService::new(Arc::new(store));

        let ranked = service
            .list_by_proximity(Coordinates::new(0.0, 0.0))
            .await
            .unwrap();

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].school.name, "Near");
        assert_eq!(ranked[1].school.name, "Far");
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let service = SchoolService::new(Arc::new(FailingSchoolStore));

        let err = service
            .list_by_proximity(Coordinates::new(0.0, 0.0))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Database(_)));
    }
}
