//! Reference records for the people the API knows about.
//!
//! These are read-mostly: they are seeded at startup and consulted by the
//! role gate to confirm that a credential matches a real account.

use serde::{Deserialize, Serialize};

use enrollhub_auth::{Principal, Role};
use enrollhub_core::{CourseId, Entity, StudentId};

/// A registered student and the courses listed on their record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub student_id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub program: String,
    #[serde(default)]
    pub courses: Vec<CourseId>,
}

impl Entity for Student {
    type Id = StudentId;

    fn id(&self) -> &Self::Id {
        &self.student_id
    }
}

/// A login account. Students link to their student record; admins do not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<StudentId>,
    pub role: Role,
}

impl Entity for User {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.username
    }
}

impl User {
    /// The identity this account is entitled to assert.
    pub fn principal(&self) -> Principal {
        Principal::new(self.username.clone(), self.student_id.clone(), self.role)
    }
}
