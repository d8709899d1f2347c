//! Authentication API client methods

use super::{ClientError, ClinicClient};
use crate::types::{ApiEnvelope, CurrentUser, LoginRequest, RegisterPatientRequest, TokenData};
use reqwest::Method;
use serde_json::Value as JsonValue;

impl ClinicClient {
    /// `POST /auth/login`. Credential failures come back as an error envelope.
    pub async fn login(
        &self,
        request: &LoginRequest,
    ) -> Result<ApiEnvelope<TokenData>, ClientError> {
        let req = self.request(Method::POST, "/auth/login").json(request);
        self.execute_envelope(req).await
    }

    /// `POST /auth/register/patient`
    pub async fn register_patient(
        &self,
        request: &RegisterPatientRequest,
    ) -> Result<ApiEnvelope<TokenData>, ClientError> {
        let req = self
            .request(Method::POST, "/auth/register/patient")
            .json(request);
        self.execute_envelope(req).await
    }

    /// `POST /auth/logout`, revoking the current bearer token server-side
    pub async fn logout(&self) -> Result<ApiEnvelope<JsonValue>, ClientError> {
        let req = self.request(Method::POST, "/auth/logout");
        self.execute(req).await
    }

    /// `GET /auth/me`
    pub async fn me(&self) -> Result<CurrentUser, ClientError> {
        let req = self.request(Method::GET, "/auth/me");
        self.execute::<ApiEnvelope<CurrentUser>>(req)
            .await?
            .into_data()
    }

    /// `GET /auth/profile`, the full role-specific profile
    pub async fn profile(&self) -> Result<JsonValue, ClientError> {
        let req = self.request(Method::GET, "/auth/profile");
        self.execute::<ApiEnvelope<JsonValue>>(req)
            .await?
            .into_data()
    }
}
