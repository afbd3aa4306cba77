use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{info, instrument};

use crate::records::AnswerSumRequest;
use crate::services::identity::IdentityProvider;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordsError {
    #[error("Not signed in")]
    Unauthenticated,

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Records request failed with status {status}")]
    Status { status: u16 },

    #[error("Failed to parse records: {message}")]
    Parse { message: String },
}

pub type RecordsResult<T> = Result<T, RecordsError>;

/// Client for the assessment records backend
#[derive(Clone)]
pub struct RecordsApi {
    http_client: Client,
    base_url: String,
}

impl RecordsApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn assessments_url(&self) -> String {
        format!("{}/assessments", self.base_url)
    }

    /// Fetch every assessment visible to the signed-in user
    #[instrument(skip(self, auth), err)]
    pub async fn list_assessments(
        &self,
        auth: &dyn IdentityProvider,
    ) -> RecordsResult<Vec<AnswerSumRequest>> {
        let token = auth.id_token().ok_or(RecordsError::Unauthenticated)?;

        let response = self
            .http_client
            .get(self.assessments_url())
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| RecordsError::Network {
                message: e.to_string(),
            })?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(RecordsError::Unauthenticated)
            }
            status if !status.is_success() => {
                return Err(RecordsError::Status {
                    status: status.as_u16(),
                })
            }
            _ => {}
        }

        let body = response.text().await.map_err(|e| RecordsError::Network {
            message: e.to_string(),
        })?;
        let records = parse_assessments(&body)?;
        info!("Loaded {} assessment records", records.len());
        Ok(records)
    }
}

pub fn parse_assessments(body: &str) -> RecordsResult<Vec<AnswerSumRequest>> {
    serde_json::from_str(body).map_err(|e| RecordsError::Parse {
        message: e.to_string(),
    })
}
