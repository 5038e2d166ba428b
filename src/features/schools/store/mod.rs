//! Persistence seam for school records.

mod postgres;

pub use postgres::PgSchoolStore;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::schools::models::{CreateSchool, School};

/// Record store holding every school known to the service.
///
/// Implementations must return `list_all` in a stable order so that
/// distance ties rank the same way on every request.
#[async_trait]
pub trait SchoolStore: Send + Sync {
    /// Persist a school and return it with its assigned id
    async fn create(&self, data: CreateSchool) -> Result<School>;

    /// Fetch every stored school
    async fn list_all(&self) -> Result<Vec<School>>;
}
