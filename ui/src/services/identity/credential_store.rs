use std::cell::RefCell;

use gloo_storage::{LocalStorage, SessionStorage, Storage};
use tracing::{info, warn};

use super::errors::{AuthError, AuthResult};
use super::types::StoredCredentials;

pub const CREDENTIALS_STORAGE_KEY: &str = "intake_auth_session";

/// Persistence for identity tokens between page loads
pub trait CredentialStore {
    fn load(&self) -> AuthResult<Option<StoredCredentials>>;
    fn save(&self, credentials: &StoredCredentials) -> AuthResult<()>;
    fn clear(&self) -> AuthResult<()>;
}

/// Browser storage backed credential store
pub struct BrowserCredentialStore {
    storage_key: String,
    use_session_storage: bool,
}

impl BrowserCredentialStore {
    /// Credentials survive browser restarts (localStorage)
    pub fn new(storage_key: &str) -> Self {
        Self {
            storage_key: storage_key.to_string(),
            use_session_storage: false,
        }
    }

    /// Credentials are dropped with the tab (sessionStorage)
    pub fn new_session_scoped(storage_key: &str) -> Self {
        Self {
            storage_key: storage_key.to_string(),
            use_session_storage: true,
        }
    }
}

impl Default for BrowserCredentialStore {
    fn default() -> Self {
        Self::new(CREDENTIALS_STORAGE_KEY)
    }
}

impl CredentialStore for BrowserCredentialStore {
    fn load(&self) -> AuthResult<Option<StoredCredentials>> {
        let stored = if self.use_session_storage {
            SessionStorage::get::<String>(&self.storage_key)
        } else {
            LocalStorage::get::<String>(&self.storage_key)
        };

        let json = match stored {
            Ok(json) => json,
            Err(_) => return Ok(None),
        };

        match serde_json::from_str(&json) {
            Ok(credentials) => Ok(Some(credentials)),
            Err(e) => {
                warn!("Discarding unreadable stored credentials: {}", e);
                self.clear()?;
                Ok(None)
            }
        }
    }

    fn save(&self, credentials: &StoredCredentials) -> AuthResult<()> {
        let json = serde_json::to_string(credentials)?;

        let result = if self.use_session_storage {
            SessionStorage::set(&self.storage_key, json)
        } else {
            LocalStorage::set(&self.storage_key, json)
        };
        result.map_err(|e| AuthError::Storage {
            message: format!("Failed to store credentials: {:?}", e),
        })?;

        info!("Credentials stored for user: {}", credentials.uid);
        Ok(())
    }

    fn clear(&self) -> AuthResult<()> {
        let storage = if self.use_session_storage {
            SessionStorage::raw()
        } else {
            LocalStorage::raw()
        };
        storage
            .remove_item(&self.storage_key)
            .map_err(|e| AuthError::Storage {
                message: format!("Failed to clear credentials: {:?}", e),
            })?;

        info!("Stored credentials cleared");
        Ok(())
    }
}

/// In-memory store for hosts without browser storage
#[derive(Default)]
pub struct MemoryCredentialStore {
    credentials: RefCell<Option<StoredCredentials>>,
}

impl MemoryCredentialStore {
    pub fn with_credentials(credentials: StoredCredentials) -> Self {
        Self {
            credentials: RefCell::new(Some(credentials)),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> AuthResult<Option<StoredCredentials>> {
        Ok(self.credentials.borrow().clone())
    }

    fn save(&self, credentials: &StoredCredentials) -> AuthResult<()> {
        *self.credentials.borrow_mut() = Some(credentials.clone());
        Ok(())
    }

    fn clear(&self) -> AuthResult<()> {
        self.credentials.borrow_mut().take();
        Ok(())
    }
}
