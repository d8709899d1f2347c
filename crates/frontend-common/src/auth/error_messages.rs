//! Outcomes of login and registration, with user-facing messages

use crate::config::AuthConfig;
use clinic_core::Role;
use thiserror::Error;

/// Successful auth call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSuccess {
    /// Session established for this role
    LoggedIn(Role),
    /// Account created; the server issued no tokens, so no session yet
    Registered,
}

/// Failed auth call. The `Display` text is meant for the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No usable response from the server
    #[error("{}", AuthConfig::NETWORK_ERROR)]
    Network,

    /// The server answered `status != "success"`
    #[error("{0}")]
    Rejected(String),
}

pub type AuthResult = Result<AuthSuccess, AuthError>;
