//! In-memory session of the current browser user

use crate::role::Role;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Opaque user profile as returned by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile(pub JsonValue);

impl UserProfile {
    /// Wrap a raw JSON profile
    pub fn new(value: JsonValue) -> Self {
        Self(value)
    }

    /// The `id` field, rendered as a string whether the server sent a number or a string
    pub fn id(&self) -> Option<String> {
        match self.0.get("id")? {
            JsonValue::String(id) => Some(id.clone()),
            JsonValue::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }

    /// Look up an arbitrary string field
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(JsonValue::as_str)
    }
}

/// Authentication session.
///
/// There is no stored `authenticated` flag: it is derived from the access token,
/// so the two can never disagree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: Option<UserProfile>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub role: Option<Role>,
    pub loading: bool,
}

impl Session {
    /// Session for a successful login or registration
    pub fn authenticated(
        user: Option<UserProfile>,
        access_token: impl Into<String>,
        refresh_token: Option<String>,
        role: Role,
    ) -> Self {
        Self {
            user,
            access_token: Some(access_token.into()),
            refresh_token,
            role: Some(role),
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Role of an authenticated session, `None` otherwise
    pub fn active_role(&self) -> Option<Role> {
        if self.is_authenticated() {
            self.role
        } else {
            None
        }
    }

    pub fn is_admin(&self) -> bool {
        self.active_role() == Some(Role::Admin)
    }

    pub fn is_doctor(&self) -> bool {
        self.active_role() == Some(Role::Doctor)
    }

    pub fn is_patient(&self) -> bool {
        self.active_role() == Some(Role::Patient)
    }

    /// Drop every credential and the profile. `loading` is reset too.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.user.is_none()
            && self.access_token.is_none()
            && self.refresh_token.is_none()
            && self.role.is_none()
    }
}
