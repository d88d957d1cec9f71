//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store wiring (enrollments, directory)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request bodies and the response envelope
//! - `errors.rs`: error kinds and their HTTP mapping

use std::any::Any;
use std::sync::Arc;

use axum::{
    Extension, Router,
    response::{IntoResponse, Response},
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use enrollhub_auth::{Hs256JwtValidator, JwtValidator};

use crate::middleware;
use errors::ApiError;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router with fresh in-memory stores.
pub fn build_app(jwt_secret: String) -> Router {
    let jwt = Arc::new(Hs256JwtValidator::new(jwt_secret.into_bytes()));
    build_app_with(jwt, AppServices::in_memory())
}

/// Build the router around caller-supplied token validation and stores.
pub fn build_app_with(jwt: Arc<dyn JwtValidator>, services: AppServices) -> Router {
    let auth_state = middleware::AuthState { jwt };

    // Protected routes: require a verified bearer token. `route_layer` leaves
    // unmatched paths to the fallback, so they stay 404.
    let protected = routes::router()
        .route_layer(Extension(Arc::new(services)))
        .route_layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(protected)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(panic_response)),
        )
}

/// A panicking handler still answers with the 500 envelope.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("handler panicked");
    ApiError::Unexpected(format!("panic: {detail}")).into_response()
}
