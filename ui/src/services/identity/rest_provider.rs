use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, info, instrument, warn};

use super::credential_store::{BrowserCredentialStore, CredentialStore, CREDENTIALS_STORAGE_KEY};
use super::errors::{AuthError, AuthResult};
use super::types::*;
use super::IdentityProvider;
use crate::services::config::IdentityConfig;
use crate::session::AuthUser;

/// Identity provider speaking the `accounts:<op>?key=<api key>` REST API
pub struct RestIdentityProvider<S = BrowserCredentialStore> {
    http_client: Client,
    config: IdentityConfig,
    store: S,
}

impl RestIdentityProvider<BrowserCredentialStore> {
    /// Provider persisting credentials in browser storage
    pub fn for_browser(config: IdentityConfig) -> Self {
        let store = if config.persistent_sessions {
            BrowserCredentialStore::new(CREDENTIALS_STORAGE_KEY)
        } else {
            BrowserCredentialStore::new_session_scoped(CREDENTIALS_STORAGE_KEY)
        };
        Self::new(config, store)
    }
}

impl<S: CredentialStore> RestIdentityProvider<S> {
    pub fn new(config: IdentityConfig, store: S) -> Self {
        Self {
            http_client: Client::new(),
            config,
            store,
        }
    }

    pub fn endpoint(&self, operation: &str) -> String {
        format!(
            "{}/accounts:{}?key={}",
            self.config.base_url.trim_end_matches('/'),
            operation,
            self.config.api_key
        )
    }

    async fn post<B, R>(&self, operation: &str, body: &B) -> AuthResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .http_client
            .post(self.endpoint(operation))
            .json(body)
            .send()
            .await
            .map_err(|e| AuthError::Network {
                message: format!("Failed to call accounts:{}: {}", operation, e),
            })?;

        let status = response.status();
        if status.is_success() {
            response.json::<R>().await.map_err(|e| AuthError::Serialization {
                message: format!("Failed to parse accounts:{} response: {}", operation, e),
            })
        } else {
            let body = response.text().await.unwrap_or_default();
            let err = parse_error_body(status.as_u16(), &body);
            warn!("accounts:{} rejected: {}", operation, err);
            Err(err)
        }
    }

    fn persist(&self, credentials: StoredCredentials) -> AuthResult<AuthUser> {
        self.store.save(&credentials)?;
        Ok(credentials.user())
    }
}

/// Decode the provider's error envelope, falling back to the HTTP status
pub fn parse_error_body(status: u16, body: &str) -> AuthError {
    match serde_json::from_str::<ProviderErrorBody>(body) {
        Ok(envelope) => AuthError::from_provider_code(&envelope.error.message),
        Err(_) => AuthError::Provider {
            code: format!("HTTP {}", status),
        },
    }
}

#[async_trait(?Send)]
impl<S: CredentialStore> IdentityProvider for RestIdentityProvider<S> {
    #[instrument(skip(self, password), err)]
    async fn sign_in(&self, email: &str, password: &str) -> AuthResult<AuthUser> {
        info!("Signing in: {}", email);

        let request = PasswordRequest {
            email,
            password,
            return_secure_token: true,
        };
        let response: TokenResponse = self.post("signInWithPassword", &request).await?;
        self.persist(response.into_credentials(current_time_secs()))
    }

    #[instrument(skip(self, password), err)]
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> AuthResult<AuthUser> {
        info!("Creating account: {}", email);

        let request = PasswordRequest {
            email,
            password,
            return_secure_token: true,
        };
        let response: TokenResponse = self.post("signUp", &request).await?;
        let mut credentials = response.into_credentials(current_time_secs());

        if let Some(name) = display_name.map(str::trim).filter(|name| !name.is_empty()) {
            let update = UpdateProfileRequest {
                id_token: &credentials.id_token,
                display_name: name,
                return_secure_token: false,
            };
            // The account exists at this point; a failed profile update only loses the name
            match self.post::<_, serde_json::Value>("update", &update).await {
                Ok(_) => credentials.display_name = Some(name.to_string()),
                Err(e) => warn!("Display name not saved: {}", e),
            }
        }

        self.persist(credentials)
    }

    #[instrument(skip(self), err)]
    async fn send_password_reset(&self, email: &str) -> AuthResult<()> {
        let request = OobCodeRequest {
            request_type: "PASSWORD_RESET",
            email,
        };
        self.post::<_, serde_json::Value>("sendOobCode", &request)
            .await?;
        info!("Password reset email requested for {}", email);
        Ok(())
    }

    #[instrument(skip(self), err)]
    async fn restore(&self) -> AuthResult<Option<AuthUser>> {
        let credentials = match self.store.load()? {
            Some(credentials) => credentials,
            None => return Ok(None),
        };

        if credentials.is_expired() {
            info!("Stored credentials expired for user: {}", credentials.uid);
            self.store.clear()?;
            return Ok(None);
        }

        let request = LookupRequest {
            id_token: &credentials.id_token,
        };
        match self.post::<_, LookupResponse>("lookup", &request).await {
            Ok(response) => {
                let Some(account) = response.users.into_iter().next() else {
                    self.store.clear()?;
                    return Ok(None);
                };
                if account.disabled {
                    self.store.clear()?;
                    return Err(AuthError::UserDisabled);
                }

                let mut refreshed = credentials;
                refreshed.email = account.email;
                refreshed.display_name = account.display_name.filter(|n| !n.is_empty());
                self.persist(refreshed).map(Some)
            }
            Err(AuthError::SessionExpired) | Err(AuthError::InvalidCredentials) => {
                self.store.clear()?;
                Ok(None)
            }
            Err(AuthError::Network { message }) => {
                // Offline: the unexpired token is still the best answer we have
                warn!("Session lookup unreachable, using stored identity: {}", message);
                Ok(Some(credentials.user()))
            }
            Err(e) => Err(e),
        }
    }

    #[instrument(skip(self), err)]
    async fn sign_out(&self) -> AuthResult<()> {
        self.store.clear().map_err(|e| {
            error!("Failed to discard credentials: {}", e);
            AuthError::SignOutFailed {
                message: e.to_string(),
            }
        })?;
        info!("Signed out");
        Ok(())
    }

    fn id_token(&self) -> Option<String> {
        match self.store.load() {
            Ok(Some(credentials)) if !credentials.is_expired() => Some(credentials.id_token),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::config::IntakeConfig;
    use crate::services::identity::MemoryCredentialStore;

    fn config() -> IdentityConfig {
        let mut config = IntakeConfig::default().identity;
        config.base_url = "https://id.example.org/v1/".to_string();
        config.api_key = "k123".to_string();
        config
    }

    fn stored(expires_at: u64) -> StoredCredentials {
        StoredCredentials {
            uid: "uid-1".to_string(),
            email: "a@b.com".to_string(),
            display_name: Some("Ada".to_string()),
            id_token: "id-token".to_string(),
            refresh_token: "refresh".to_string(),
            expires_at: Some(expires_at),
        }
    }

    struct BrokenStore;

    impl CredentialStore for BrokenStore {
        fn load(&self) -> AuthResult<Option<StoredCredentials>> {
            Ok(None)
        }

        fn save(&self, _credentials: &StoredCredentials) -> AuthResult<()> {
            Ok(())
        }

        fn clear(&self) -> AuthResult<()> {
            Err(AuthError::Storage {
                message: "storage disabled".to_string(),
            })
        }
    }

    #[test]
    fn test_endpoint_format() {
        let provider = RestIdentityProvider::new(config(), MemoryCredentialStore::default());
        assert_eq!(
            provider.endpoint("signInWithPassword"),
            "https://id.example.org/v1/accounts:signInWithPassword?key=k123"
        );
    }

    #[test]
    fn test_parse_error_body() {
        let body = r#"{"error": {"code": 400, "message": "EMAIL_EXISTS", "errors": []}}"#;
        assert_eq!(parse_error_body(400, body), AuthError::EmailInUse);

        assert_eq!(
            parse_error_body(502, "<html>Bad gateway</html>"),
            AuthError::Provider {
                code: "HTTP 502".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_sign_out_clears_credentials() {
        let store = MemoryCredentialStore::with_credentials(stored(u64::MAX / 2));
        let provider = RestIdentityProvider::new(config(), store);
        assert_eq!(provider.id_token().as_deref(), Some("id-token"));

        provider.sign_out().await.unwrap();
        assert_eq!(provider.id_token(), None);
        assert!(provider.store.load().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_sign_out_failure_is_reported() {
        let provider = RestIdentityProvider::new(config(), BrokenStore);
        match provider.sign_out().await {
            Err(AuthError::SignOutFailed { message }) => assert!(message.contains("storage disabled")),
            other => panic!("expected SignOutFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_restore_without_credentials() {
        let provider = RestIdentityProvider::new(config(), MemoryCredentialStore::default());
        assert_eq!(provider.restore().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_restore_discards_expired_credentials() {
        let provider =
            RestIdentityProvider::new(config(), MemoryCredentialStore::with_credentials(stored(10)));
        assert_eq!(provider.id_token(), None);

        assert_eq!(provider.restore().await.unwrap(), None);
        assert!(provider.store.load().unwrap().is_none());
    }
}
