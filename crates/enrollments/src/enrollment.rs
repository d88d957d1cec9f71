use serde::{Deserialize, Serialize};
use thiserror::Error;

use enrollhub_core::{CourseId, StudentId, ValueObject};

use crate::seed;

/// A student enrolled in a course.
///
/// The pair is the whole record: enrollments are created and removed, never
/// edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub student_id: StudentId,
    pub course_id: CourseId,
}

impl ValueObject for Enrollment {}

impl Enrollment {
    pub fn new(student_id: StudentId, course_id: CourseId) -> Self {
        Self {
            student_id,
            course_id,
        }
    }

    fn is(&self, student_id: &StudentId, course_id: &CourseId) -> bool {
        &self.student_id == student_id && &self.course_id == course_id
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnrollmentError {
    #[error("studentId {student_id} && courseId {course_id} already exists")]
    Duplicate {
        student_id: StudentId,
        course_id: CourseId,
    },

    #[error("enrollment {student_id}/{course_id} does not exist")]
    NotFound {
        student_id: StudentId,
        course_id: CourseId,
    },
}

/// Ordered set of enrollments.
///
/// Invariant: no two entries share both `student_id` and `course_id`.
/// Order is insertion order; lookups are linear scans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<Enrollment>,
}

impl Roster {
    /// Build a roster from arbitrary entries, keeping the first of any duplicates.
    pub fn from_entries(entries: impl IntoIterator<Item = Enrollment>) -> Self {
        let mut roster = Self {
            entries: Vec::new(),
        };
        for e in entries {
            let _ = roster.enroll(e.student_id, e.course_id);
        }
        roster
    }

    /// The default snapshot that `reset` restores.
    pub fn seeded() -> Self {
        Self::from_entries(seed::enrollments())
    }

    pub fn entries(&self) -> &[Enrollment] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn for_student(&self, student_id: &StudentId) -> Vec<Enrollment> {
        self.entries
            .iter()
            .filter(|e| &e.student_id == student_id)
            .cloned()
            .collect()
    }

    pub fn contains(&self, student_id: &StudentId, course_id: &CourseId) -> bool {
        self.entries.iter().any(|e| e.is(student_id, course_id))
    }

    /// Append a new enrollment, rejecting an existing pair.
    pub fn enroll(
        &mut self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<Enrollment, EnrollmentError> {
        if self.contains(&student_id, &course_id) {
            return Err(EnrollmentError::Duplicate {
                student_id,
                course_id,
            });
        }

        let enrollment = Enrollment::new(student_id, course_id);
        self.entries.push(enrollment.clone());
        Ok(enrollment)
    }

    /// Remove the first matching enrollment and return it.
    pub fn withdraw(
        &mut self,
        student_id: &StudentId,
        course_id: &CourseId,
    ) -> Result<Enrollment, EnrollmentError> {
        let Some(index) = self.entries.iter().position(|e| e.is(student_id, course_id)) else {
            return Err(EnrollmentError::NotFound {
                student_id: student_id.clone(),
                course_id: course_id.clone(),
            });
        };

        Ok(self.entries.remove(index))
    }

    pub fn reset(&mut self) {
        *self = Self::seeded();
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::seeded()
    }
}
