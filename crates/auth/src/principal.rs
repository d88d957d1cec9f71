use serde::{Deserialize, Serialize};

use enrollhub_core::StudentId;

use crate::{JwtClaims, Role};

/// An authenticated caller, as asserted by a verified credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub username: String,
    #[serde(rename = "studentId", skip_serializing_if = "Option::is_none")]
    pub student_id: Option<StudentId>,
    pub role: Role,
}

impl Principal {
    pub fn new(username: impl Into<String>, student_id: Option<StudentId>, role: Role) -> Self {
        Self {
            username: username.into(),
            student_id,
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// True when this principal is the student owning `student_id`.
    pub fn owns(&self, student_id: &StudentId) -> bool {
        self.role == Role::Student && self.student_id.as_ref() == Some(student_id)
    }
}

impl From<JwtClaims> for Principal {
    fn from(claims: JwtClaims) -> Self {
        Self {
            username: claims.username,
            student_id: claims.student_id,
            role: claims.role,
        }
    }
}
