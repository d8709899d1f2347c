//! Authentication module

pub mod context;

pub use context::{AuthProvider, use_auth};
