//! Clinic API client

pub mod auth;
pub mod error;

use crate::types::ApiEnvelope;
use error::ClientError;
use reqwest::{Client, ClientBuilder, header};
use std::time::Duration;
use url::Url;

/// Default request timeout, applied on native targets
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_USER_AGENT: &str = concat!("clinic-client/", env!("CARGO_PKG_VERSION"));

/// Clinic API client.
///
/// Holds an optional bearer token; every request built while a token is set
/// carries `Authorization: Bearer <token>`.
#[derive(Clone)]
pub struct ClinicClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ClinicClient {
    /// Client for `base_url` with the default timeout and no token
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Start configuring a client
    pub fn builder() -> ClinicClientBuilder {
        ClinicClientBuilder::default()
    }

    /// API root, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Bearer token currently attached to requests
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Same connection pool, different token
    pub fn with_token(&self, token: Option<String>) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            token,
        }
    }

    /// Request to `path` under the API root, with the bearer header when a token is set
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);

        if let Some(token) = &self.token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        request
    }

    /// Send a request and decode a 2xx JSON body. Other statuses map through
    /// [`ClientError::from_status`] with the response text as the message.
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }

    /// Send a request whose error responses also carry the JSON envelope.
    ///
    /// The auth endpoints answer bad credentials with 401/403 and a
    /// `{status: "error", message}` body; that body is returned as `Ok`.
    /// Any JSON object counts, with or without `status`. Only bodies that are
    /// not a JSON object become status errors.
    pub async fn execute_envelope<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<ApiEnvelope<T>, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<ApiEnvelope<T>>(&body) {
            Ok(envelope) => {
                if !status.is_success() {
                    tracing::debug!(status = status.as_u16(), "Envelope on error status");
                }
                Ok(envelope)
            }
            Err(err) if status.is_success() => Err(ClientError::Serialization(err)),
            Err(_) => {
                let message = if body.is_empty() {
                    status.to_string()
                } else {
                    body
                };
                Err(ClientError::from_status(status, message))
            }
        }
    }
}

/// Options for [`ClinicClient`]; only the base URL is required
#[derive(Default)]
pub struct ClinicClientBuilder {
    base_url: Option<String>,
    token: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClinicClientBuilder {
    /// API root such as `https://clinic.example/api`
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Token sent as `Authorization: Bearer`
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Per-request timeout, ignored on wasm32 where the browser decides
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Validate the base URL and create the connection pool
    pub fn build(self) -> Result<ClinicClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        Url::parse(&base_url)
            .map_err(|e| ClientError::Configuration(format!("invalid base_url '{base_url}': {e}")))?;

        let base_url = base_url.trim_end_matches('/').to_string();

        let client_builder = ClientBuilder::new().user_agent(
            self.user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        );

        #[cfg(not(target_arch = "wasm32"))]
        let client_builder = client_builder.timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT));

        #[cfg(target_arch = "wasm32")]
        let _ = self.timeout;

        let client = client_builder.build()?;

        Ok(ClinicClient {
            client,
            base_url,
            token: self.token,
        })
    }
}
