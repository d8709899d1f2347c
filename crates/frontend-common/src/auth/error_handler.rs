//! Global auth error handler
//!
//! When the gateway sees a 401 it clears the session and fires this callback,
//! so the app can navigate away without every caller checking for it.

use crate::config::AuthConfig;
use clinic_core::Role;
use std::cell::RefCell;
use std::rc::Rc;

/// Receives the role the user held before the session was cleared
pub type AuthErrorCallback = Rc<dyn Fn(Option<Role>)>;

thread_local! {
    /// Global auth error callback
    static AUTH_ERROR_CALLBACK: RefCell<Option<AuthErrorCallback>> = RefCell::new(None);
}

/// Set the global auth error callback
pub fn set_auth_error_callback(callback: AuthErrorCallback) {
    AUTH_ERROR_CALLBACK.with(|cb| {
        *cb.borrow_mut() = Some(callback);
    });
}

/// Clear the auth error callback
pub fn clear_auth_error_callback() {
    AUTH_ERROR_CALLBACK.with(|cb| {
        *cb.borrow_mut() = None;
    });
}

/// Trigger the auth error callback. Returns whether one was installed.
pub fn trigger_auth_error(role: Option<Role>) -> bool {
    // Clone out first so the callback may replace itself.
    let callback = AUTH_ERROR_CALLBACK.with(|cb| cb.borrow().clone());
    match callback {
        Some(callback) => {
            callback(role);
            true
        }
        None => false,
    }
}

/// Login page to land on after a forced logout
pub fn login_redirect_target(role: Option<Role>) -> String {
    role.map(|role| role.login_path())
        .unwrap_or_else(|| AuthConfig::LANDING_PATH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_trigger_without_callback_is_noop() {
        clear_auth_error_callback();
        assert!(!trigger_auth_error(Some(Role::Admin)));
    }

    #[test]
    fn test_trigger_passes_role() {
        let seen = Rc::new(Cell::new(None));
        let sink = seen.clone();
        set_auth_error_callback(Rc::new(move |role| sink.set(role)));

        assert!(trigger_auth_error(Some(Role::Doctor)));
        assert_eq!(seen.get(), Some(Role::Doctor));

        clear_auth_error_callback();
        assert!(!trigger_auth_error(None));
    }

    #[test]
    fn test_login_redirect_target() {
        assert_eq!(login_redirect_target(Some(Role::Patient)), "/login/patient");
        assert_eq!(login_redirect_target(None), "/");
    }
}
