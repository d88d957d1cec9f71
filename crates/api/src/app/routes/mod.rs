use axum::{Router, routing::get};

pub mod enrollments;
pub mod system;

/// Router for all authenticated endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/api/v2/whoami", get(system::whoami))
        // `nest` only registers the bare prefix for the nested "/" route.
        .route("/api/v2/enrollments/", get(enrollments::list_enrollments))
        .nest("/api/v2/enrollments", enrollments::router())
}
