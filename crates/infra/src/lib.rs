//! Infrastructure layer: shared, lock-guarded stores behind traits.

pub mod store;

pub use store::{
    Directory, EnrollmentStore, InMemoryDirectory, InMemoryEnrollmentStore, StoreError,
};
