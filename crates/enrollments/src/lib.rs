//! Enrollment domain module.
//!
//! This crate contains the enrollment rules (uniqueness, removal, reset to a
//! known snapshot) and the reference records for students and users,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! locking).

pub mod directory;
pub mod enrollment;
pub mod seed;

pub use directory::{Student, User};
pub use enrollment::{Enrollment, EnrollmentError, Roster};
