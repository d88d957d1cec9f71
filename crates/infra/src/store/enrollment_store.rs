use std::sync::{Arc, RwLock};

use enrollhub_core::{CourseId, StudentId};
use enrollhub_enrollments::{Enrollment, Roster};

use super::StoreError;

/// Enrollment storage abstraction.
///
/// Every method is synchronous and completes under a single lock acquisition,
/// so check-then-write sequences (duplicate detection, first-match removal)
/// are atomic with respect to concurrent requests.
pub trait EnrollmentStore: Send + Sync {
    fn list(&self) -> Result<Vec<Enrollment>, StoreError>;
    fn find_by_student(&self, student_id: &StudentId) -> Result<Vec<Enrollment>, StoreError>;
    fn insert(&self, student_id: StudentId, course_id: CourseId) -> Result<Enrollment, StoreError>;
    fn remove(&self, student_id: &StudentId, course_id: &CourseId) -> Result<Enrollment, StoreError>;
    /// Restore the default snapshot.
    fn reset(&self) -> Result<(), StoreError>;
}

impl<S> EnrollmentStore for Arc<S>
where
    S: EnrollmentStore + ?Sized,
{
    fn list(&self) -> Result<Vec<Enrollment>, StoreError> {
        (**self).list()
    }

    fn find_by_student(&self, student_id: &StudentId) -> Result<Vec<Enrollment>, StoreError> {
        (**self).find_by_student(student_id)
    }

    fn insert(&self, student_id: StudentId, course_id: CourseId) -> Result<Enrollment, StoreError> {
        (**self).insert(student_id, course_id)
    }

    fn remove(&self, student_id: &StudentId, course_id: &CourseId) -> Result<Enrollment, StoreError> {
        (**self).remove(student_id, course_id)
    }

    fn reset(&self) -> Result<(), StoreError> {
        (**self).reset()
    }
}

/// In-memory enrollment store, seeded with the default snapshot.
#[derive(Debug)]
pub struct InMemoryEnrollmentStore {
    inner: RwLock<Roster>,
}

impl InMemoryEnrollmentStore {
    pub fn new() -> Self {
        Self::with_roster(Roster::seeded())
    }

    pub fn with_roster(roster: Roster) -> Self {
        Self {
            inner: RwLock::new(roster),
        }
    }
}

impl Default for InMemoryEnrollmentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EnrollmentStore for InMemoryEnrollmentStore {
    fn list(&self) -> Result<Vec<Enrollment>, StoreError> {
        let roster = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(roster.entries().to_vec())
    }

    fn find_by_student(&self, student_id: &StudentId) -> Result<Vec<Enrollment>, StoreError> {
        let roster = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(roster.for_student(student_id))
    }

    fn insert(&self, student_id: StudentId, course_id: CourseId) -> Result<Enrollment, StoreError> {
        let mut roster = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let enrollment = roster.enroll(student_id, course_id)?;
        tracing::debug!(
            student_id = %enrollment.student_id,
            course_id = %enrollment.course_id,
            total = roster.len(),
            "enrollment inserted"
        );
        Ok(enrollment)
    }

    fn remove(&self, student_id: &StudentId, course_id: &CourseId) -> Result<Enrollment, StoreError> {
        let mut roster = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let enrollment = roster.withdraw(student_id, course_id)?;
        tracing::debug!(%student_id, %course_id, total = roster.len(), "enrollment removed");
        Ok(enrollment)
    }

    fn reset(&self) -> Result<(), StoreError> {
        let mut roster = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        roster.reset();
        tracing::info!(total = roster.len(), "enrollments reset to default snapshot");
        Ok(())
    }
}
