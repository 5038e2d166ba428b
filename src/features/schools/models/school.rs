use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::geo::Coordinates;

/// Database model for school
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct School {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
}

impl School {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// Fields needed to insert a school; id and timestamp come from the store
#[derive(Debug, Clone, PartialEq)]
pub struct CreateSchool {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}
