//! Authenticated API access with cross-cutting error handling
//!
//! Every call made through the [`Gateway`] carries the store's current token.
//! Failures are returned to the caller unchanged, but a 401 also ends the
//! session locally and fires the global auth error callback.

use crate::auth::{error_handler::trigger_auth_error, store::AuthStore};
use clinic_core::{Role, StoragePort};
use clinic_http::ClientError;
use std::future::Future;

/// What the gateway did about a failed call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayEvent {
    /// Session cleared; `role` is what the user held before
    Unauthorized { role: Option<Role> },
    Forbidden,
    ServerError { status: u16 },
}

/// Wrapper around the store's client that handles auth errors
pub struct Gateway<S: StoragePort> {
    store: AuthStore<S>,
}

impl<S: StoragePort> Clone for Gateway<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: StoragePort> Gateway<S> {
    pub fn new(store: AuthStore<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &AuthStore<S> {
        &self.store
    }

    /// Create a request builder, authenticated when the store holds a token
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.store.client().request(method, path)
    }

    /// Execute a request and handle auth errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let client = self.store.client();
        self.guard(client.execute(request)).await
    }

    /// Run any client call through the gateway's error handling
    pub async fn guard<T, F>(&self, api_call: F) -> Result<T, ClientError>
    where
        F: Future<Output = Result<T, ClientError>>,
    {
        match api_call.await {
            Ok(result) => Ok(result),
            Err(error) => {
                self.handle_error(&error);
                Err(error)
            }
        }
    }

    /// React to a failed call. Returns what was done, if anything.
    pub fn handle_error(&self, error: &ClientError) -> Option<GatewayEvent> {
        if error.is_auth_expired() {
            let role = self.store.role();
            tracing::warn!(role = ?role, "Session rejected by server, logging out");
            self.store.clear();
            if !trigger_auth_error(role) {
                tracing::debug!("No auth error callback installed");
            }
            Some(GatewayEvent::Unauthorized { role })
        } else if error.is_forbidden() {
            tracing::warn!("Access forbidden - insufficient permissions");
            Some(GatewayEvent::Forbidden)
        } else if error.is_server_error() {
            let status = error.status().unwrap_or(500);
            tracing::error!(
                status,
                reason = error.server_message().unwrap_or_default(),
                "Server error"
            );
            Some(GatewayEvent::ServerError { status })
        } else {
            None
        }
    }
}
