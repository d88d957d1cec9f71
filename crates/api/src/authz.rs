//! API-side role gate.
//!
//! Runs after the token is verified: confirms the claimed identity against
//! the directory, then applies the endpoint's access policy.

use enrollhub_auth::{AccessPolicy, AuthzError, Role, authorize, check_identity};
use enrollhub_infra::Directory;

use crate::app::errors::ApiError;
use crate::context::PrincipalContext;

/// Check the caller against `policy`.
///
/// This is intended to be called **before** touching the store.
pub fn authorize_request(
    directory: &dyn Directory,
    principal: &PrincipalContext,
    policy: AccessPolicy<'_>,
) -> Result<(), ApiError> {
    gate(directory, principal, policy).map_err(|e| {
        tracing::warn!(
            username = principal.username(),
            role = %principal.role(),
            reason = %e,
            "access denied"
        );
        ApiError::from(e)
    })
}

fn gate(
    directory: &dyn Directory,
    principal: &PrincipalContext,
    policy: AccessPolicy<'_>,
) -> Result<(), AuthzError> {
    let known = directory
        .find_user(principal.username())
        .map(|u| u.principal());
    check_identity(principal.principal(), known.as_ref())?;

    // A student account must still have a student record behind it.
    if principal.role() == Role::Student {
        let has_record = principal
            .student_id()
            .is_some_and(|id| directory.find_student(id).is_some());
        if !has_record {
            return Err(AuthzError::IdentityMismatch(principal.username().to_string()));
        }
    }

    authorize(principal.principal(), policy)
}
