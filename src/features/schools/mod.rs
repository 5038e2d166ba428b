//! School records and proximity search.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/addSchool` | No | Store a school |
//! | GET | `/listSchools?latitude=&longitude=` | No | All schools, nearest first |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

pub use services::SchoolService;
pub use store::{PgSchoolStore, SchoolStore};
