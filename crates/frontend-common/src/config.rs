//! Frontend configuration

use clinic_http::{ClientError, ClinicClient};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Message shown when the server rejects a login without saying why
    pub const DEFAULT_LOGIN_ERROR: &'static str = "Invalid credentials";

    /// Message shown when the server rejects a registration without saying why
    pub const DEFAULT_REGISTER_ERROR: &'static str = "Registration failed";

    /// Message for any login/register call that produced no usable response
    pub const NETWORK_ERROR: &'static str = "Network error";

    /// Fallback navigation target after a forced logout with no known role
    pub const LANDING_PATH: &'static str = "/";
}

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the clinic API
    pub api_base_url: String,
    /// Request timeout in milliseconds (native targets only)
    pub request_timeout_ms: u64,
    /// Minimum log level
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_base_url(),
            request_timeout_ms: 10_000,
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    /// Parse a JSON config, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Build an unauthenticated API client from this configuration
    pub fn build_client(&self) -> Result<ClinicClient, ClientError> {
        ClinicClient::builder()
            .base_url(&self.api_base_url)
            .timeout(self.request_timeout())
            .build()
    }
}

/// Base URL: build-time `CLINIC_API_BASE_URL`, then the page origin, then localhost
fn default_base_url() -> String {
    if let Some(url) = option_env!("CLINIC_API_BASE_URL") {
        return url.to_string();
    }

    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        if let Ok(origin) = window.location().origin() {
            return origin;
        }
    }

    "http://localhost:5000".to_string()
}
