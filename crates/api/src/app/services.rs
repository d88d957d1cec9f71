//! Store wiring shared by every handler.

use std::sync::Arc;

use enrollhub_infra::{Directory, EnrollmentStore, InMemoryDirectory, InMemoryEnrollmentStore};

/// Handles to the process-wide stores.
#[derive(Clone)]
pub struct AppServices {
    pub enrollments: Arc<dyn EnrollmentStore>,
    pub directory: Arc<dyn Directory>,
}

impl AppServices {
    pub fn new(enrollments: Arc<dyn EnrollmentStore>, directory: Arc<dyn Directory>) -> Self {
        Self {
            enrollments,
            directory,
        }
    }

    /// In-memory stores loaded with the default snapshot (dev/test).
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryEnrollmentStore::new()),
            Arc::new(InMemoryDirectory::seeded()),
        )
    }
}

impl core::fmt::Debug for AppServices {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AppServices").finish_non_exhaustive()
    }
}
