use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use enrollhub_auth::Principal;

use crate::app::dto::Envelope;
use crate::context::PrincipalContext;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Echo the verified identity back to the caller.
pub async fn whoami(Extension(principal): Extension<PrincipalContext>) -> impl IntoResponse {
    Json(Envelope::<Principal>::ok(
        "Current user",
        principal.principal().clone(),
    ))
}
