use thiserror::Error;

/// Failures surfaced by the identity provider and the credential store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email address is already registered")]
    EmailInUse,

    #[error("Password is too weak: {message}")]
    WeakPassword { message: String },

    #[error("Account has been disabled")]
    UserDisabled,

    #[error("Too many attempts, try again later")]
    RateLimited,

    #[error("Session expired")]
    SessionExpired,

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Identity provider error: {code}")]
    Provider { code: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Sign-out failed: {message}")]
    SignOutFailed { message: String },
}

impl AuthError {
    /// Map an identity provider error code (`error.message` in the response body)
    pub fn from_provider_code(code: &str) -> Self {
        // Codes may carry a detail suffix: "WEAK_PASSWORD : Password should be at least 6 characters"
        let (head, detail) = match code.split_once(':') {
            Some((head, detail)) => (head.trim(), detail.trim()),
            None => (code.trim(), ""),
        };

        match head {
            "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
                AuthError::InvalidCredentials
            }
            "EMAIL_EXISTS" => AuthError::EmailInUse,
            "WEAK_PASSWORD" => AuthError::WeakPassword {
                message: detail.to_string(),
            },
            "USER_DISABLED" => AuthError::UserDisabled,
            "TOO_MANY_ATTEMPTS_TRY_LATER" => AuthError::RateLimited,
            "TOKEN_EXPIRED" | "INVALID_ID_TOKEN" | "USER_NOT_FOUND" => AuthError::SessionExpired,
            _ => AuthError::Provider {
                code: code.trim().to_string(),
            },
        }
    }

    /// Text suitable for showing under an auth form
    pub fn user_message(&self) -> String {
        match self {
            AuthError::InvalidCredentials => "Incorrect email or password.".to_string(),
            AuthError::EmailInUse => "An account with this email already exists.".to_string(),
            AuthError::WeakPassword { message } if !message.is_empty() => message.clone(),
            AuthError::WeakPassword { .. } => "Please choose a stronger password.".to_string(),
            AuthError::UserDisabled => "This account has been disabled.".to_string(),
            AuthError::RateLimited => {
                "Too many attempts. Please wait a moment and try again.".to_string()
            }
            AuthError::SessionExpired => "Your session has expired. Please sign in again.".to_string(),
            AuthError::Network { .. } => {
                "Could not reach the sign-in service. Check your connection.".to_string()
            }
            other => format!("Something went wrong: {}", other),
        }
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        AuthError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        AuthError::Network {
            message: err.to_string(),
        }
    }
}

/// Result type for identity operations
pub type AuthResult<T> = Result<T, AuthError>;
