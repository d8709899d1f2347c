//! Authentication module

pub mod error_handler;
pub mod error_messages;
pub mod store;

// Re-export commonly used items
pub use error_handler::{
    clear_auth_error_callback, login_redirect_target, set_auth_error_callback, trigger_auth_error,
};
pub use error_messages::{AuthError, AuthResult, AuthSuccess};
pub use store::{AuthStore, SessionListener};
