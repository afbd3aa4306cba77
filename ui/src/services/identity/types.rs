use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::session::AuthUser;

/// Seconds before expiry at which stored credentials are treated as stale
pub const EXPIRY_LEEWAY_SECS: u64 = 60;

#[cfg(target_arch = "wasm32")]
pub fn current_time_secs() -> u64 {
    (js_sys::Date::now() / 1000.0) as u64
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_time_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Identity tokens persisted between page loads
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StoredCredentials {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    pub id_token: String,
    pub refresh_token: String,
    /// Unix seconds; falls back to the token's `exp` claim when absent
    pub expires_at: Option<u64>,
}

impl StoredCredentials {
    pub fn user(&self) -> AuthUser {
        AuthUser {
            uid: self.uid.clone(),
            email: self.email.clone(),
            display_name: self.display_name.clone(),
        }
    }

    pub fn expiration(&self) -> Option<u64> {
        self.expires_at
            .or_else(|| token_expiration(&self.id_token))
    }

    pub fn is_expired_at(&self, now: u64) -> bool {
        match self.expiration() {
            Some(exp) => now + EXPIRY_LEEWAY_SECS >= exp,
            None => true,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_time_secs())
    }
}

/// Read the `exp` claim of a JWT without verifying it
pub fn token_expiration(jwt: &str) -> Option<u64> {
    let payload = jwt.split('.').nth(1)?;
    let decoded = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&decoded).ok()?;
    claims.get("exp")?.as_u64()
}

/// Body shared by the password sign-in and sign-up endpoints
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PasswordRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub return_secure_token: bool,
}

/// Response of `accounts:signInWithPassword` and `accounts:signUp`
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub local_id: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    pub id_token: String,
    pub refresh_token: String,
    /// Lifetime in seconds, sent as a string
    #[serde(default)]
    pub expires_in: Option<String>,
}

impl TokenResponse {
    pub fn into_credentials(self, now: u64) -> StoredCredentials {
        let expires_at = self
            .expires_in
            .as_deref()
            .and_then(|secs| secs.parse::<u64>().ok())
            .map(|secs| now + secs);

        StoredCredentials {
            uid: self.local_id,
            email: self.email,
            display_name: self.display_name.filter(|name| !name.is_empty()),
            id_token: self.id_token,
            refresh_token: self.refresh_token,
            expires_at,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest<'a> {
    pub id_token: &'a str,
    pub display_name: &'a str,
    pub return_secure_token: bool,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OobCodeRequest<'a> {
    pub request_type: &'static str,
    pub email: &'a str,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest<'a> {
    pub id_token: &'a str,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LookupUser {
    pub local_id: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LookupResponse {
    #[serde(default)]
    pub users: Vec<LookupUser>,
}

/// `{"error": {"code": 400, "message": "EMAIL_NOT_FOUND"}}`
#[derive(Deserialize, Debug, Clone)]
pub struct ProviderErrorBody {
    pub error: ProviderErrorDetail,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ProviderErrorDetail {
    #[serde(default)]
    pub code: u16,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    // {"sub":"test","exp":9999999999}
    const FAR_FUTURE_JWT: &str = "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiJ0ZXN0IiwiZXhwIjo5OTk5OTk5OTk5fQ.sig";
    // {"sub":"test","exp":1623976400}
    const PAST_JWT: &str = "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiJ0ZXN0IiwiZXhwIjoxNjIzOTc2NDAwfQ.sig";

    fn credentials(id_token: &str, expires_at: Option<u64>) -> StoredCredentials {
        StoredCredentials {
            uid: "uid-1".to_string(),
            email: "a@b.com".to_string(),
            display_name: None,
            id_token: id_token.to_string(),
            refresh_token: "refresh".to_string(),
            expires_at,
        }
    }

    #[test]
    fn test_token_expiration_claim() {
        assert_eq!(token_expiration(FAR_FUTURE_JWT), Some(9_999_999_999));
        assert_eq!(token_expiration(PAST_JWT), Some(1_623_976_400));
        assert_eq!(token_expiration("not-a-jwt"), None);
    }

    #[test]
    fn test_expiry_prefers_explicit_timestamp() {
        let creds = credentials(PAST_JWT, Some(2_000));
        assert!(!creds.is_expired_at(1_000));
        assert!(creds.is_expired_at(1_950));
    }

    #[test]
    fn test_expiry_falls_back_to_token_claim() {
        assert!(!credentials(FAR_FUTURE_JWT, None).is_expired());
        assert!(credentials(PAST_JWT, None).is_expired());
        assert!(credentials("opaque", None).is_expired());
    }

    #[test]
    fn test_token_response_into_credentials() {
        let json = r#"{
            "kind": "identitytoolkit#VerifyPasswordResponse",
            "localId": "abc123",
            "email": "a@b.com",
            "displayName": "",
            "idToken": "id.token.here",
            "registered": true,
            "refreshToken": "refresh",
            "expiresIn": "3600"
        }"#;
        let response: TokenResponse = serde_json::from_str(json).unwrap();
        let creds = response.into_credentials(1_000);

        assert_eq!(creds.uid, "abc123");
        assert_eq!(creds.display_name, None);
        assert_eq!(creds.expires_at, Some(4_600));
        assert_eq!(creds.user().email, "a@b.com");
    }

    #[test]
    fn test_request_bodies_use_camel_case() {
        let body = serde_json::to_value(PasswordRequest {
            email: "a@b.com",
            password: "secret",
            return_secure_token: true,
        })
        .unwrap();
        assert_eq!(body["returnSecureToken"], true);

        let body = serde_json::to_value(OobCodeRequest {
            request_type: "PASSWORD_RESET",
            email: "a@b.com",
        })
        .unwrap();
        assert_eq!(body["requestType"], "PASSWORD_RESET");
    }
}
