//! `/api/v2/enrollments` handlers.
//!
//! Each handler: validate path/body, run the role gate, make exactly one
//! store call, wrap the outcome in the JSON envelope.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use enrollhub_auth::AccessPolicy;
use enrollhub_core::StudentId;
use enrollhub_enrollments::Enrollment;

use crate::app::dto::{CourseRequest, Envelope};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;
use crate::authz::authorize_request;
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_enrollments))
        .route("/reset", post(reset_enrollments))
        .route(
            "/:studentId",
            get(get_student_enrollments)
                .post(enroll_student)
                .delete(withdraw_student),
        )
}

pub async fn list_enrollments(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
) -> Result<impl IntoResponse, ApiError> {
    authorize_request(services.directory.as_ref(), &principal, AccessPolicy::AdminOnly)?;

    let enrollments = services.enrollments.list()?;

    Ok(Json(Envelope::ok("Enrollments Information", enrollments)))
}

pub async fn reset_enrollments(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
) -> Result<impl IntoResponse, ApiError> {
    authorize_request(services.directory.as_ref(), &principal, AccessPolicy::AdminOnly)?;

    services.enrollments.reset()?;
    tracing::info!(by = principal.username(), "enrollments reset");

    Ok(Json(Envelope::<()>::message(
        "enrollments database has been reset",
    )))
}

pub async fn get_student_enrollments(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(student_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let student_id = StudentId::parse(student_id)?;
    authorize_request(
        services.directory.as_ref(),
        &principal,
        AccessPolicy::AdminOrSelf(&student_id),
    )?;

    let enrollments = services.enrollments.find_by_student(&student_id)?;

    Ok(Json(Envelope::ok("Student Information", enrollments)))
}

pub async fn enroll_student(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(student_id): Path<String>,
    body: Result<Json<CourseRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let student_id = StudentId::parse(student_id)?;
    authorize_request(
        services.directory.as_ref(),
        &principal,
        AccessPolicy::AdminOrSelf(&student_id),
    )?;
    let course_id = CourseRequest::course_id(body)?;

    let created = services.enrollments.insert(student_id, course_id)?;
    tracing::info!(
        by = principal.username(),
        student_id = %created.student_id,
        course_id = %created.course_id,
        "enrollment added"
    );

    let message = format!(
        "Student {} & Course {} has been added successfully",
        created.student_id, created.course_id
    );
    Ok((StatusCode::CREATED, Json(Envelope::<Enrollment>::ok(message, created))))
}

pub async fn withdraw_student(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(student_id): Path<String>,
    body: Result<Json<CourseRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let student_id = StudentId::parse(student_id)?;
    authorize_request(
        services.directory.as_ref(),
        &principal,
        AccessPolicy::AdminOrSelf(&student_id),
    )?;
    let course_id = CourseRequest::course_id(body)?;

    let removed = services.enrollments.remove(&student_id, &course_id)?;
    tracing::info!(
        by = principal.username(),
        student_id = %removed.student_id,
        course_id = %removed.course_id,
        "enrollment deleted"
    );

    let message = format!(
        "Student {} & Course {} has been deleted successfully",
        removed.student_id, removed.course_id
    );
    Ok(Json(Envelope::<Enrollment>::ok(message, removed)))
}
