//! Integration tests for the clinic HTTP client

use clinic_core::Role;
use clinic_http::{ApiStatus, ClientError, ClinicClient, LoginRequest};
use serde_json::json;
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_client_builder() {
    let client = ClinicClient::builder()
        .base_url("http://localhost:5000/")
        .token("test-token")
        .build();

    assert!(client.is_ok());
    let client = client.unwrap();
    assert_eq!(client.base_url(), "http://localhost:5000");
    assert_eq!(client.token(), Some("test-token"));
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let result = ClinicClient::builder().build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_client_builder_rejects_malformed_base_url() {
    let result = ClinicClient::new("not a url");
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_login_success_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "role": "doctor",
            "email": "a@x.com",
            "password": "p"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Login successful",
            "data": {
                "user": {"id": 1},
                "access_token": "t1",
                "refresh_token": "r1",
                "token_type": "bearer"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = ClinicClient::new(mock_server.uri()).unwrap();
    let envelope = client
        .login(&LoginRequest::with_email(Role::Doctor, "a@x.com", "p"))
        .await
        .unwrap();

    assert!(envelope.is_success());
    let data = envelope.data.unwrap();
    assert_eq!(data.access_token.as_deref(), Some("t1"));
    assert_eq!(data.refresh_token.as_deref(), Some("r1"));
    assert_eq!(data.profile().unwrap().id().as_deref(), Some("1"));
}

#[tokio::test]
async fn test_login_error_status_still_yields_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "status": "error",
            "message": "Invalid credentials"
        })))
        .mount(&mock_server)
        .await;

    let client = ClinicClient::new(mock_server.uri()).unwrap();
    let envelope = client
        .login(&LoginRequest::with_username(Role::Admin, "root", "bad"))
        .await
        .unwrap();

    assert_eq!(envelope.status, ApiStatus::Error);
    assert_eq!(envelope.message.as_deref(), Some("Invalid credentials"));
    assert!(envelope.data.is_none());
}

#[tokio::test]
async fn test_non_envelope_error_body_maps_to_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let client = ClinicClient::new(mock_server.uri()).unwrap();
    let result = client
        .login(&LoginRequest::with_username(Role::Admin, "root", "pw"))
        .await;

    match result {
        Err(err @ ClientError::ServerError { .. }) => {
            assert!(err.is_server_error());
            assert_eq!(err.status(), Some(502));
            assert_eq!(err.server_message(), Some("Bad Gateway"));
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_json_body_without_status_is_an_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "msg": "Missing Authorization Header"
        })))
        .mount(&mock_server)
        .await;

    let client = ClinicClient::new(mock_server.uri()).unwrap();
    let envelope = client
        .login(&LoginRequest::with_username(Role::Admin, "root", "pw"))
        .await
        .unwrap();

    assert_eq!(envelope.status, ApiStatus::Unknown);
    assert!(!envelope.is_success());
    assert_eq!(envelope.message, None);
}

#[tokio::test]
async fn test_bearer_token_attached_when_present() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .and(header("authorization", "Bearer t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Successfully logged out"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ClinicClient::builder()
        .base_url(mock_server.uri())
        .token("t1")
        .build()
        .unwrap();

    let envelope = client.logout().await.unwrap();
    assert!(envelope.is_success());
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": "success", "data": {}})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ClinicClient::new(mock_server.uri()).unwrap();
    let envelope = client
        .login(&LoginRequest::with_username(Role::Patient, "p", "pw"))
        .await
        .unwrap();
    assert!(envelope.is_success());
}

#[tokio::test]
async fn test_with_token_swaps_credentials() {
    let client = ClinicClient::new("http://localhost:5000").unwrap();
    let authed = client.with_token(Some("abc".into()));
    assert_eq!(authed.token(), Some("abc"));
    assert_eq!(client.token(), None);
    assert_eq!(authed.with_token(None).token(), None);
}

#[tokio::test]
async fn test_me_unwraps_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": {
                "id": 3,
                "username": "drwho",
                "email": "who@x.com",
                "role": "doctor",
                "is_active": true
            }
        })))
        .mount(&mock_server)
        .await;

    let client = ClinicClient::builder()
        .base_url(mock_server.uri())
        .token("t1")
        .build()
        .unwrap();

    let me = client.me().await.unwrap();
    assert_eq!(me.id, 3);
    assert_eq!(me.role, Role::Doctor);
    let profile = me.into_profile().unwrap();
    assert_eq!(profile.get_str("username"), Some("drwho"));
}

#[tokio::test]
async fn test_error_handling() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Token has expired"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/auth/profile"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&mock_server)
        .await;

    let client = ClinicClient::new(mock_server.uri()).unwrap();

    let result = client.me().await;
    assert!(matches!(result, Err(ref e) if e.is_auth_expired()));

    let result = client.profile().await;
    assert!(matches!(result, Err(ref e) if e.is_forbidden()));
}

#[tokio::test]
async fn test_network_failure_is_classified() {
    // Reserve a port, then release it so nothing is listening there.
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };

    let client = ClinicClient::new(uri).unwrap();
    let result = client
        .login(&LoginRequest::with_username(Role::Doctor, "d", "pw"))
        .await;

    match result {
        Err(err) => {
            assert!(err.is_network());
            assert_eq!(err.status(), None);
        }
        Ok(envelope) => panic!("expected network error, got {envelope:?}"),
    }
}
