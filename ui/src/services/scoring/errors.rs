use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("Column '{column}' not found in norm table")]
    MissingColumn { column: String },

    #[error("Column 'raw score' not found in norm table")]
    MissingRawScoreColumn,

    #[error("Raw score {raw} not found in norm table")]
    RawScoreNotFound { raw: i64 },

    #[error("The score for {column} with raw score {raw} is empty")]
    EmptyScore { column: String, raw: i64 },

    #[error("Invalid age for norm lookup: {age}")]
    InvalidAge { age: f64 },

    #[error("Norm table {path} not found")]
    NotFound { path: String },

    #[error("Failed to fetch norm table {path}: {message}")]
    Fetch { path: String, message: String },

    #[error("Failed to parse norm table: {message}")]
    Parse { message: String },
}

impl From<serde_json::Error> for ScoringError {
    fn from(err: serde_json::Error) -> Self {
        ScoringError::Parse {
            message: err.to_string(),
        }
    }
}

pub type ScoringResult<T> = Result<T, ScoringError>;
