//! Role gate: decide whether a verified principal may touch a resource.

use thiserror::Error;

use enrollhub_core::StudentId;

use crate::Principal;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    /// The credential names a user the directory does not know.
    #[error("unknown user '{0}'")]
    UnknownUser(String),

    /// The credential disagrees with the directory (role or student record).
    #[error("credential does not match directory record for '{0}'")]
    IdentityMismatch(String),

    #[error("forbidden: {0}")]
    Forbidden(String),
}

/// Endpoint-level access requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy<'a> {
    /// Administrators only.
    AdminOnly,
    /// Administrators, or the student whose id is the target.
    AdminOrSelf(&'a StudentId),
}

/// Authorize a principal against an endpoint policy.
///
/// - No IO
/// - No panics
pub fn authorize(principal: &Principal, policy: AccessPolicy<'_>) -> Result<(), AuthzError> {
    if principal.is_admin() {
        return Ok(());
    }

    match policy {
        AccessPolicy::AdminOnly => Err(AuthzError::Forbidden(format!(
            "role {} is not allowed",
            principal.role
        ))),
        AccessPolicy::AdminOrSelf(target) if principal.owns(target) => Ok(()),
        AccessPolicy::AdminOrSelf(target) => Err(AuthzError::Forbidden(format!(
            "{} may not access student {}",
            principal.username, target
        ))),
    }
}

/// Check a claimed identity against the directory's record for that user.
///
/// `known` is the directory's view of the same username, if any. Role must
/// match; students must also carry the same student id.
pub fn check_identity(claimed: &Principal, known: Option<&Principal>) -> Result<(), AuthzError> {
    let Some(known) = known else {
        return Err(AuthzError::UnknownUser(claimed.username.clone()));
    };

    if known.role != claimed.role {
        return Err(AuthzError::IdentityMismatch(claimed.username.clone()));
    }
    if claimed.is_admin() {
        return Ok(());
    }
    if known.student_id != claimed.student_id {
        return Err(AuthzError::IdentityMismatch(claimed.username.clone()));
    }

    Ok(())
}
