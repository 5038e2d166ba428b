//! Root, health and fallback routes.

pub mod handlers;
pub mod routes;
