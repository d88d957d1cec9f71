use enrollhub_auth::{Principal, Role};
use enrollhub_core::StudentId;

/// Principal context for a request (verified identity + role).
///
/// Inserted by the auth middleware; present for every protected route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    principal: Principal,
}

impl PrincipalContext {
    pub fn new(principal: Principal) -> Self {
        Self { principal }
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn username(&self) -> &str {
        &self.principal.username
    }

    pub fn student_id(&self) -> Option<&StudentId> {
        self.principal.student_id.as_ref()
    }

    pub fn role(&self) -> Role {
        self.principal.role
    }
}
