use thiserror::Error;

use crate::records::CatalogError;
use crate::services::identity::AuthError;
use crate::services::records_api::RecordsError;
use crate::services::scoring::ScoringError;

/// Any failure a screen may need to show
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntakeError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Records(#[from] RecordsError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {}", .0.join("; "))]
    Configuration(Vec<String>),
}

pub type IntakeResult<T> = Result<T, IntakeError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
}

impl IntakeError {
    /// Whether the user should be sent back to the sign-in screen
    pub fn requires_sign_in(&self) -> bool {
        matches!(
            self,
            IntakeError::Auth(AuthError::SessionExpired)
                | IntakeError::Records(RecordsError::Unauthenticated)
        )
    }

    pub fn is_temporary(&self) -> bool {
        matches!(
            self,
            IntakeError::Auth(AuthError::Network { .. })
                | IntakeError::Auth(AuthError::RateLimited)
                | IntakeError::Records(RecordsError::Network { .. })
                | IntakeError::Scoring(ScoringError::Fetch { .. })
        )
    }

    /// Get error severity for the banner style
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            IntakeError::Configuration(_) => ErrorSeverity::High,
            IntakeError::Records(RecordsError::Parse { .. }) => ErrorSeverity::High,
            _ if self.is_temporary() => ErrorSeverity::Low,
            _ => ErrorSeverity::Medium,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            IntakeError::Auth(e) => e.user_message(),
            IntakeError::Records(RecordsError::Unauthenticated) => {
                "Please sign in to view assessments.".to_string()
            }
            IntakeError::Records(RecordsError::Network { .. }) => {
                "Could not reach the records service.".to_string()
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions_and_classification() {
        let err: IntakeError = RecordsError::Unauthenticated.into();
        assert!(err.requires_sign_in());
        assert_eq!(err.user_message(), "Please sign in to view assessments.");

        let err: IntakeError = AuthError::RateLimited.into();
        assert!(err.is_temporary());
        assert_eq!(err.severity(), ErrorSeverity::Low);

        let err: IntakeError = ScoringError::RawScoreNotFound { raw: 3 }.into();
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.to_string(), "Raw score 3 not found in norm table");
    }

    #[test]
    fn test_configuration_message() {
        let err = IntakeError::Configuration(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(err.to_string(), "Configuration error: a; b");
        assert_eq!(err.severity(), ErrorSeverity::High);
    }
}
