//! Process-wide stores injected into the HTTP layer.

pub mod directory;
pub mod enrollment_store;

pub use directory::{Directory, InMemoryDirectory};
pub use enrollment_store::{EnrollmentStore, InMemoryEnrollmentStore};

use enrollhub_enrollments::EnrollmentError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error(transparent)]
    Enrollment(#[from] EnrollmentError),

    /// A writer panicked while holding the lock.
    #[error("store lock poisoned")]
    Poisoned,
}
