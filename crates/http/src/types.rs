//! Wire types of the clinic API

use chrono::NaiveDate;
use clinic_core::{Role, UserProfile};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::client::error::ClientError;

/// `status` field of every API response. Absent or unrecognised values are `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Error,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Response envelope: `{status, message?, data?}`.
///
/// Any JSON object decodes, so bodies from other layers (`{"msg": ..}` from the
/// JWT extension, `{"message": ..}` from a proxy) read as a non-success envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub status: ApiStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn is_success(&self) -> bool {
        self.status == ApiStatus::Success
    }

    /// Payload of a successful response
    pub fn into_data(self) -> Result<T, ClientError> {
        match (self.status, self.data) {
            (ApiStatus::Success, Some(data)) => Ok(data),
            (ApiStatus::Success, None) => Err(ClientError::Rejected(
                "response carried no data".to_string(),
            )),
            (_, _) => Err(ClientError::Rejected(
                self.message.unwrap_or_else(|| "request failed".to_string()),
            )),
        }
    }
}

/// Token payload returned by login and registration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenData {
    #[serde(default)]
    pub user: Option<JsonValue>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

impl TokenData {
    pub fn profile(&self) -> Option<UserProfile> {
        self.user.clone().map(UserProfile::new)
    }
}

/// Login request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub password: String,
}

impl LoginRequest {
    pub fn with_username(
        role: Role,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            role,
            username: Some(username.into()),
            email: None,
            password: password.into(),
        }
    }

    pub fn with_email(role: Role, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            role,
            username: None,
            email: Some(email.into()),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Patient self-registration body. Validation is left to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterPatientRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    pub gender: Gender,
    pub phone: String,
    #[serde(default)]
    pub blood_group: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub emergency_contact_name: Option<String>,
    #[serde(default)]
    pub emergency_contact_phone: Option<String>,
    #[serde(default)]
    pub medical_history: Option<String>,
}

/// Lightweight identity from `GET /auth/me`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
}

impl CurrentUser {
    pub fn into_profile(self) -> Result<UserProfile, ClientError> {
        Ok(UserProfile::new(serde_json::to_value(self)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_tolerates_unknown_status_and_missing_fields() {
        let envelope: ApiEnvelope<TokenData> =
            serde_json::from_value(json!({"status": "pending"})).unwrap();
        assert_eq!(envelope.status, ApiStatus::Unknown);
        assert!(envelope.data.is_none());
        assert!(!envelope.is_success());
    }

    #[test]
    fn test_envelope_without_status_is_not_success() {
        let envelope: ApiEnvelope<TokenData> =
            serde_json::from_value(json!({"msg": "Missing Authorization Header"})).unwrap();
        assert_eq!(envelope.status, ApiStatus::Unknown);
        assert_eq!(envelope.message, None);

        let envelope: ApiEnvelope<TokenData> =
            serde_json::from_value(json!({"message": "maintenance"})).unwrap();
        assert!(!envelope.is_success());
        assert_eq!(envelope.message.as_deref(), Some("maintenance"));
    }

    #[test]
    fn test_into_data_uses_server_message() {
        let envelope: ApiEnvelope<JsonValue> =
            serde_json::from_value(json!({"status": "error", "message": "User not found"}))
                .unwrap();
        match envelope.into_data() {
            Err(ClientError::Rejected(message)) => assert_eq!(message, "User not found"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_login_request_omits_absent_identifier() {
        let body = serde_json::to_value(LoginRequest::with_email(Role::Doctor, "a@x.com", "p"))
            .unwrap();
        assert_eq!(body, json!({"role": "doctor", "email": "a@x.com", "password": "p"}));
    }

    #[test]
    fn test_register_request_serializes_date() {
        let request = RegisterPatientRequest {
            username: "jdoe".into(),
            email: "j@x.com".into(),
            password: "password1".into(),
            first_name: "J".into(),
            last_name: "Doe".into(),
            dob: NaiveDate::from_ymd_opt(1990, 4, 2).unwrap(),
            gender: Gender::Other,
            phone: "0123456789".into(),
            blood_group: None,
            address: None,
            emergency_contact_name: None,
            emergency_contact_phone: None,
            medical_history: None,
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["dob"], "1990-04-02");
        assert_eq!(body["gender"], "other");
    }
}
