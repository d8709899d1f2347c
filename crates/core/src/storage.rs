//! Persisted key-value storage behind a small port

use crate::error::{CoreError, CoreResult};
use crate::role::Role;
use crate::session::Session;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Keys of the persisted auth record
pub struct StorageKeys;

impl StorageKeys {
    pub const ACCESS_TOKEN: &'static str = "access_token";
    pub const REFRESH_TOKEN: &'static str = "refresh_token";
    pub const USER_ROLE: &'static str = "user_role";

    pub const ALL: [&'static str; 3] = [Self::ACCESS_TOKEN, Self::REFRESH_TOKEN, Self::USER_ROLE];
}

/// Durable string key-value storage (browser `localStorage` in production)
#[cfg_attr(test, mockall::automock)]
pub trait StoragePort {
    fn get(&self, key: &str) -> CoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> CoreResult<()>;
    fn remove(&self, key: &str) -> CoreResult<()>;
}

/// In-memory storage. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a single entry, for assertions
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> CoreResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| CoreError::storage_unavailable("memory storage lock poisoned"))
    }
}

impl StoragePort for MemoryStorage {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// Auth data that survives a page reload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedRecord {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub role: Role,
}

impl PersistedRecord {
    /// Record for an authenticated session, `None` when token or role is missing
    pub fn from_session(session: &Session) -> Option<Self> {
        Some(Self {
            access_token: session.access_token.clone()?,
            refresh_token: session.refresh_token.clone(),
            role: session.role?,
        })
    }

    /// Read the record. Both token and a known role must be present.
    pub fn load(storage: &impl StoragePort) -> CoreResult<Option<Self>> {
        let Some(access_token) = storage.get(StorageKeys::ACCESS_TOKEN)? else {
            return Ok(None);
        };
        let Some(role) = storage.get(StorageKeys::USER_ROLE)? else {
            return Ok(None);
        };
        let role = match role.parse::<Role>() {
            Ok(role) => role,
            Err(err) => {
                tracing::warn!(error = %err, "Ignoring persisted session with unknown role");
                return Ok(None);
            }
        };
        let refresh_token = storage.get(StorageKeys::REFRESH_TOKEN)?;

        Ok(Some(Self {
            access_token,
            refresh_token,
            role,
        }))
    }

    /// Write all three keys. An absent refresh token is stored as an empty string.
    pub fn save(&self, storage: &impl StoragePort) -> CoreResult<()> {
        storage.set(StorageKeys::ACCESS_TOKEN, &self.access_token)?;
        storage.set(
            StorageKeys::REFRESH_TOKEN,
            self.refresh_token.as_deref().unwrap_or_default(),
        )?;
        storage.set(StorageKeys::USER_ROLE, self.role.as_str())
    }

    /// Remove all three keys. Every removal is attempted; the first error is returned.
    pub fn clear(storage: &impl StoragePort) -> CoreResult<()> {
        let mut first_error = None;
        for key in StorageKeys::ALL {
            if let Err(err) = storage.remove(key) {
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Session rebuilt from storage. The profile has no persisted form.
    pub fn into_session(self) -> Session {
        let refresh_token = self.refresh_token.filter(|token| !token.is_empty());
        Session::authenticated(None, self.access_token, refresh_token, self.role)
    }
}
