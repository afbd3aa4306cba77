//! Configuration for the intake front-end
//!
//! Defaults are compiled in; deployments override them at build time through
//! `INTAKE_*` environment variables.

use serde::{Deserialize, Serialize};

use crate::records::DEFAULT_ROWS_PER_PAGE;

pub const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";
pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_NORMS_BASE_URL: &str = "/norms";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeConfig {
    pub identity: IdentityConfig,
    pub api: ApiConfig,
    pub scoring: ScoringConfig,
    pub table: TableConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Base of the `accounts:<op>` endpoints
    pub base_url: String,

    /// Public web API key of the identity project
    pub api_key: String,

    /// Keep credentials in localStorage rather than sessionStorage
    pub persistent_sessions: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the records backend
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Base URL the norm tables are served from
    pub norms_base_url: String,

    /// Number of norm tables kept in memory
    pub cache_capacity: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    pub rows_per_page: usize,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            identity: IdentityConfig {
                base_url: DEFAULT_IDENTITY_BASE_URL.to_string(),
                api_key: String::new(),
                persistent_sessions: true,
            },
            api: ApiConfig {
                base_url: DEFAULT_API_BASE_URL.to_string(),
            },
            scoring: ScoringConfig {
                norms_base_url: DEFAULT_NORMS_BASE_URL.to_string(),
                cache_capacity: 12,
            },
            table: TableConfig {
                rows_per_page: DEFAULT_ROWS_PER_PAGE,
            },
        }
    }
}

impl IntakeConfig {
    /// Defaults with the build-time `INTAKE_*` overrides applied
    pub fn from_build_env() -> Self {
        Self::default().with_overrides(
            option_env!("INTAKE_IDENTITY_BASE_URL"),
            option_env!("INTAKE_IDENTITY_API_KEY"),
            option_env!("INTAKE_API_BASE_URL"),
            option_env!("INTAKE_NORMS_BASE_URL"),
        )
    }

    pub fn with_overrides(
        mut self,
        identity_base_url: Option<&str>,
        identity_api_key: Option<&str>,
        api_base_url: Option<&str>,
        norms_base_url: Option<&str>,
    ) -> Self {
        if let Some(url) = identity_base_url.filter(|v| !v.trim().is_empty()) {
            self.identity.base_url = url.trim().to_string();
        }
        if let Some(key) = identity_api_key.filter(|v| !v.trim().is_empty()) {
            self.identity.api_key = key.trim().to_string();
        }
        if let Some(url) = api_base_url.filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
        if let Some(url) = norms_base_url.filter(|v| !v.trim().is_empty()) {
            self.scoring.norms_base_url = url.trim().to_string();
        }
        self
    }

    /// Validate the configuration, collecting every problem found
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.identity.base_url.trim().is_empty() {
            errors.push("identity.base_url must not be empty".to_string());
        }
        if self.identity.api_key.trim().is_empty() {
            errors.push("identity.api_key must be set (INTAKE_IDENTITY_API_KEY)".to_string());
        }
        if self.api.base_url.trim().is_empty() {
            errors.push("api.base_url must not be empty".to_string());
        }
        if self.scoring.norms_base_url.trim().is_empty() {
            errors.push("scoring.norms_base_url must not be empty".to_string());
        }
        if self.scoring.cache_capacity == 0 {
            errors.push("scoring.cache_capacity must be greater than 0".to_string());
        }
        if self.table.rows_per_page == 0 {
            errors.push("table.rows_per_page must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> IntakeConfig {
        IntakeConfig::default().with_overrides(None, Some("test-key"), None, None)
    }

    #[test]
    fn test_config_validation() {
        assert!(configured().validate().is_ok());
    }

    #[test]
    fn test_missing_api_key_is_reported() {
        let errors = IntakeConfig::default().validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("api_key"));
    }

    #[test]
    fn test_invalid_config() {
        let mut config = configured();
        config.api.base_url = "  ".to_string();
        config.scoring.cache_capacity = 0;
        config.table.rows_per_page = 0;

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_overrides_ignore_blank_values() {
        let config = IntakeConfig::default().with_overrides(
            Some(""),
            Some(" key "),
            Some("https://records.example.org"),
            None,
        );
        assert_eq!(config.identity.base_url, DEFAULT_IDENTITY_BASE_URL);
        assert_eq!(config.identity.api_key, "key");
        assert_eq!(config.api.base_url, "https://records.example.org");
        assert_eq!(config.scoring.norms_base_url, DEFAULT_NORMS_BASE_URL);
    }
}
