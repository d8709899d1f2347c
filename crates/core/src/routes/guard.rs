//! Advisory role gate for navigation.
//!
//! This only decides what the client should render. The server enforces
//! authorization on every request regardless of what happens here.

use crate::role::Role;
use crate::session::Session;

/// Outcome of checking a session against a route's role requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Route is public, or the session holds the required role
    Allow,
    /// No authenticated session; send the user to the login page for `role`
    RedirectToLogin { role: Role },
    /// Authenticated, but as a different role
    Forbidden { required: Role, actual: Role },
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }

    /// Where navigation should go instead, if anywhere.
    ///
    /// A user holding the wrong role is sent to their own dashboard.
    pub fn redirect_target(&self) -> Option<String> {
        match self {
            GuardDecision::Allow => None,
            GuardDecision::RedirectToLogin { role } => Some(role.login_path()),
            GuardDecision::Forbidden { actual, .. } => Some(actual.dashboard_path()),
        }
    }
}

/// Check a session against an optional role requirement
pub fn check_access(session: &Session, required: Option<Role>) -> GuardDecision {
    let Some(required) = required else {
        return GuardDecision::Allow;
    };

    match session.active_role() {
        Some(actual) if actual == required => GuardDecision::Allow,
        Some(actual) => {
            tracing::debug!(%required, %actual, "Route gated to another role");
            GuardDecision::Forbidden { required, actual }
        }
        None => GuardDecision::RedirectToLogin { role: required },
    }
}
