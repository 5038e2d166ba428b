use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::schools::handlers;
use crate::features::schools::services::SchoolService;

/// Create routes for the schools feature
///
/// Paths are kept at the root for compatibility with existing clients.
pub fn routes(service: Arc<SchoolService>) -> Router {
    Router::new()
        .route("/addSchool", post(handlers::add_school))
        .route("/listSchools", get(handlers::list_schools))
        .with_state(service)
}
