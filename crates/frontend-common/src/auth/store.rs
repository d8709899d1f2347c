//! Auth session store
//!
//! Owns the current [`Session`] and keeps the persisted record in step with it.
//! Login and register never fail past this boundary: transport problems and
//! server rejections both come back as an [`AuthError`] value. Logout always
//! clears local state, whatever the server says.
//!
//! The store is single-threaded (`Rc`/`RefCell`) like the browser it runs in.
//! No `RefCell` borrow is held across an `.await`; two overlapping calls race
//! and the later response wins.

use crate::auth::error_messages::{AuthError, AuthResult, AuthSuccess};
use crate::config::AuthConfig;
use crate::gateway::Gateway;
use clinic_core::{PersistedRecord, Role, Session, StoragePort, UserProfile};
use clinic_http::{
    ApiEnvelope, ClientError, ClinicClient, LoginRequest, RegisterPatientRequest, TokenData,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Called with a snapshot after every session change
pub type SessionListener = Rc<dyn Fn(&Session)>;

struct Inner<S> {
    session: RefCell<Session>,
    storage: S,
    client: ClinicClient,
    listener: RefCell<Option<SessionListener>>,
}

/// Shared handle to the session. Clones refer to the same session.
pub struct AuthStore<S: StoragePort> {
    inner: Rc<Inner<S>>,
}

impl<S: StoragePort> Clone for AuthStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: StoragePort> PartialEq for AuthStore<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<S: StoragePort> AuthStore<S> {
    /// Empty session. The client should carry no token; the store adds its own.
    pub fn new(client: ClinicClient, storage: S) -> Self {
        Self {
            inner: Rc::new(Inner {
                session: RefCell::new(Session::default()),
                storage,
                client: client.with_token(None),
                listener: RefCell::new(None),
            }),
        }
    }

    /// Snapshot of the current session
    pub fn session(&self) -> Session {
        self.inner.session.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.inner.session.borrow().access_token.clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.inner.session.borrow().active_role()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.session.borrow().is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.session.borrow().loading
    }

    /// API client carrying the current token, if any
    pub fn client(&self) -> ClinicClient {
        self.inner.client.with_token(self.token())
    }

    /// Gateway bound to this store
    pub fn gateway(&self) -> Gateway<S> {
        Gateway::new(self.clone())
    }

    /// Register the session listener, replacing any previous one
    pub fn set_listener(&self, listener: SessionListener) {
        *self.inner.listener.borrow_mut() = Some(listener);
    }

    pub fn clear_listener(&self) {
        *self.inner.listener.borrow_mut() = None;
    }

    /// Log in with role and credentials
    pub async fn login(&self, request: &LoginRequest) -> AuthResult {
        self.set_loading(true);
        let response = self.inner.client.login(request).await;
        let result = self.apply_login(request.role, response);
        self.set_loading(false);
        result
    }

    fn apply_login(
        &self,
        role: Role,
        response: Result<ApiEnvelope<TokenData>, ClientError>,
    ) -> AuthResult {
        match response {
            Ok(envelope) if envelope.is_success() => {
                let data = envelope.data.unwrap_or_default();
                match data.access_token.clone() {
                    Some(token) => {
                        self.establish(Session::authenticated(
                            data.profile(),
                            token,
                            data.refresh_token,
                            role,
                        ));
                        tracing::info!(%role, "Logged in");
                        Ok(AuthSuccess::LoggedIn(role))
                    }
                    None => {
                        tracing::warn!(%role, "Login succeeded without an access token");
                        self.reset_session();
                        Err(AuthError::Rejected(
                            envelope
                                .message
                                .unwrap_or_else(|| AuthConfig::DEFAULT_LOGIN_ERROR.to_string()),
                        ))
                    }
                }
            }
            Ok(envelope) => {
                self.reset_session();
                Err(AuthError::Rejected(
                    envelope
                        .message
                        .unwrap_or_else(|| AuthConfig::DEFAULT_LOGIN_ERROR.to_string()),
                ))
            }
            Err(err) => {
                tracing::error!(error = %err, "Login error");
                self.reset_session();
                Err(AuthError::Network)
            }
        }
    }

    /// Self-register as a patient.
    ///
    /// If the server issues tokens the user is logged in as a patient. If it
    /// does not, registration still succeeds and the session is left as it was.
    pub async fn register(&self, request: &RegisterPatientRequest) -> AuthResult {
        self.set_loading(true);
        let response = self.inner.client.register_patient(request).await;
        let result = self.apply_register(response);
        self.set_loading(false);
        result
    }

    fn apply_register(&self, response: Result<ApiEnvelope<TokenData>, ClientError>) -> AuthResult {
        match response {
            Ok(envelope) if envelope.is_success() => {
                let data = envelope.data.unwrap_or_default();
                match data.access_token.clone() {
                    Some(token) => {
                        self.establish(Session::authenticated(
                            data.profile(),
                            token,
                            data.refresh_token,
                            Role::Patient,
                        ));
                        tracing::info!("Registered and logged in as patient");
                        Ok(AuthSuccess::LoggedIn(Role::Patient))
                    }
                    None => {
                        tracing::info!("Registered without auto-login");
                        Ok(AuthSuccess::Registered)
                    }
                }
            }
            Ok(envelope) => {
                self.reset_session();
                Err(AuthError::Rejected(
                    envelope
                        .message
                        .unwrap_or_else(|| AuthConfig::DEFAULT_REGISTER_ERROR.to_string()),
                ))
            }
            Err(err) => {
                tracing::error!(error = %err, "Registration error");
                self.reset_session();
                Err(AuthError::Network)
            }
        }
    }

    /// Revoke the token server-side if possible, then clear everything locally
    pub async fn logout(&self) {
        if let Some(token) = self.token() {
            match self.inner.client.with_token(Some(token)).logout().await {
                Ok(envelope) if envelope.is_success() => tracing::debug!("Server logout succeeded"),
                Ok(envelope) => {
                    tracing::warn!(reason = ?envelope.message, "Server logout rejected")
                }
                Err(err) => tracing::warn!(error = %err, "Server logout failed"),
            }
        }
        self.clear();
        tracing::info!("Logged out");
    }

    /// Clear the session and the persisted record without contacting the server
    pub fn clear(&self) {
        if let Err(err) = PersistedRecord::clear(&self.inner.storage) {
            tracing::warn!(error = %err, "Failed to clear persisted session");
        }
        self.reset_session();
    }

    /// Rebuild the session from storage without contacting the server.
    ///
    /// The profile is not persisted, so `user` stays empty until
    /// [`fetch_profile`](Self::fetch_profile) runs. Returns whether a session
    /// was restored.
    pub fn restore(&self) -> bool {
        match PersistedRecord::load(&self.inner.storage) {
            Ok(Some(record)) => {
                let role = record.role;
                self.replace_session(record.into_session());
                tracing::debug!(%role, "Restored persisted session");
                true
            }
            Ok(None) => false,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read persisted session");
                false
            }
        }
    }

    /// Load the current user's profile through the gateway and keep it in the session
    pub async fn fetch_profile(&self) -> Result<UserProfile, ClientError> {
        let Some(token) = self.token() else {
            return Err(ClientError::AuthenticationFailed(
                "no active session".to_string(),
            ));
        };

        let client = self.client();
        let profile = self.gateway().guard(client.me()).await?.into_profile()?;

        // Ignore the result if the session changed while the request was in flight.
        if self.token().as_deref() == Some(token.as_str()) {
            self.update(|session| session.user = Some(profile.clone()));
        }
        Ok(profile)
    }

    fn establish(&self, session: Session) {
        if let Some(record) = PersistedRecord::from_session(&session) {
            if let Err(err) = record.save(&self.inner.storage) {
                tracing::warn!(error = %err, "Failed to persist session");
            }
        }
        self.replace_session(session);
    }

    fn set_loading(&self, loading: bool) {
        self.update(|session| session.loading = loading);
    }

    fn reset_session(&self) {
        self.update(Session::clear);
    }

    fn replace_session(&self, session: Session) {
        self.update(|current| *current = session);
    }

    fn update(&self, mutate: impl FnOnce(&mut Session)) {
        let snapshot = {
            let mut session = self.inner.session.borrow_mut();
            mutate(&mut session);
            session.clone()
        };
        let listener = self.inner.listener.borrow().clone();
        if let Some(listener) = listener {
            listener(&snapshot);
        }
    }
}
