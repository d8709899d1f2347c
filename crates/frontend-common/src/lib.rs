//! Session, gateway and configuration shared by the clinic web client
//!
//! Nothing here depends on a UI framework; the Yew app wires these pieces
//! into its context providers.

pub mod auth;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod storage;

pub use auth::{AuthError, AuthResult, AuthStore, AuthSuccess, SessionListener};
pub use config::{AuthConfig, ClientConfig};
pub use gateway::{Gateway, GatewayEvent};
pub use logging::init_logging;
pub use storage::BrowserStorage;
