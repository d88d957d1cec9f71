use axum::http::StatusCode;
use axum::response::IntoResponse;
use thiserror::Error;

use enrollhub_auth::{AuthzError, JwtError};
use enrollhub_core::DomainError;
use enrollhub_enrollments::EnrollmentError;
use enrollhub_infra::StoreError;

use crate::app::dto::Envelope;

/// Every way a request can fail, as seen by the client.
///
/// The `Display` text is the client-facing message. Internal detail carried
/// by `Unexpected` is logged, never sent.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authorization header is required")]
    MissingCredential,

    #[error("Invalid or expired token")]
    InvalidCredential,

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Validation(String),

    #[error("studentId && courseId is already exists")]
    DuplicateEnrollment,

    #[error("Enrollment does not exist")]
    NotFound,

    #[error("Something is wrong, please try again")]
    Unexpected(String),
}

impl ApiError {
    pub fn forbidden() -> Self {
        Self::Forbidden("Forbidden access".to_string())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingCredential => StatusCode::UNAUTHORIZED,
            ApiError::InvalidCredential | ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::DuplicateEnrollment => StatusCode::CONFLICT,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::MissingCredential => "missing_credential",
            ApiError::InvalidCredential => "invalid_credential",
            ApiError::Forbidden(_) => "forbidden",
            ApiError::Validation(_) => "validation_error",
            ApiError::DuplicateEnrollment => "duplicate_enrollment",
            ApiError::NotFound => "not_found",
            ApiError::Unexpected(_) => "unexpected",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        if let ApiError::Unexpected(detail) = &self {
            tracing::error!(%detail, "request failed unexpectedly");
        }

        let status = self.status();
        let body = Envelope::<()>::failure(self.to_string(), self.code());
        (status, axum::Json(body)).into_response()
    }
}

impl From<JwtError> for ApiError {
    fn from(_: JwtError) -> Self {
        ApiError::InvalidCredential
    }
}

impl From<AuthzError> for ApiError {
    fn from(_: AuthzError) -> Self {
        ApiError::forbidden()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidId(msg) => ApiError::Validation(msg),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Enrollment(EnrollmentError::Duplicate { .. }) => ApiError::DuplicateEnrollment,
            StoreError::Enrollment(EnrollmentError::NotFound { .. }) => ApiError::NotFound,
            e @ StoreError::Poisoned => ApiError::Unexpected(e.to_string()),
        }
    }
}
