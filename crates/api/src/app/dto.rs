use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use enrollhub_core::CourseId;

use crate::app::errors::ApiError;

// -------------------------
// Request DTOs
// -------------------------

/// Body of enroll/withdraw requests.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequest {
    pub course_id: Option<String>,
}

impl CourseRequest {
    /// Unwrap the extractor result and validate the course id.
    pub fn course_id(body: Result<axum::Json<Self>, JsonRejection>) -> Result<CourseId, ApiError> {
        let axum::Json(body) = body.map_err(|e| ApiError::validation(e.body_text()))?;
        let raw = body
            .course_id
            .ok_or_else(|| ApiError::validation("courseId is required"))?;
        Ok(CourseId::parse(raw)?)
    }
}

// -------------------------
// Response envelope
// -------------------------

/// Uniform JSON body: `{success, message, data?, error?}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            error: None,
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>, code: &str) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            error: Some(code.to_string()),
        }
    }
}
