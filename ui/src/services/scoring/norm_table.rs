use serde::{Deserialize, Serialize};

use super::errors::{ScoringError, ScoringResult};
use crate::records::{Gender, Respondent, Setting};

pub const RAW_SCORE_COLUMN: &str = "raw score";
pub const T_SCORE_COLUMN: &str = "t score";

/// Which of the three tables of a norm group
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormTableKind {
    /// Raw total to T-score
    Total,
    /// ISCI, FI and EMI composites
    Combined,
    /// One column per clinical scale
    Normal,
}

impl NormTableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NormTableKind::Total => "total",
            NormTableKind::Combined => "combined",
            NormTableKind::Normal => "normal",
        }
    }
}

/// Selects one norm table: population band plus table kind
#[derive(Clone, Debug, PartialEq)]
pub struct NormTableKey {
    pub gender: Gender,
    pub age: f64,
    pub kind: NormTableKind,
    pub respondent: Respondent,
    pub setting: Setting,
}

impl NormTableKey {
    /// Whole years of age used to pick the norm band
    pub fn age_band(&self) -> ScoringResult<u32> {
        if !self.age.is_finite() || self.age <= 0.0 || self.age > 120.0 {
            return Err(ScoringError::InvalidAge { age: self.age });
        }
        Ok(self.age.floor() as u32)
    }

    /// `{respondent}/{setting}/{gender}/{age}/{kind}.json`
    pub fn relative_path(&self) -> ScoringResult<String> {
        Ok(format!(
            "{}/{}/{}/{}/{}.json",
            self.respondent.as_str(),
            self.setting.as_str(),
            self.gender.as_str(),
            self.age_band()?,
            self.kind.as_str()
        ))
    }

    /// Cache identity; two ages in the same band share a table
    pub fn cache_key(&self) -> ScoringResult<String> {
        self.relative_path()
    }
}

/// Wire shape: `{"columns": [...], "rows": [[...], ...]}`, `null` for empty cells
#[derive(Deserialize, Serialize, Debug, Clone)]
struct NormTableDocument {
    columns: Vec<String>,
    rows: Vec<Vec<Option<f64>>>,
}

/// A raw-score lookup table
#[derive(Debug, Clone, PartialEq)]
pub struct NormTable {
    columns: Vec<String>,
    rows: Vec<Vec<Option<f64>>>,
}

fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

impl NormTable {
    /// Headers are trimmed and lower-cased; short rows are padded with empty cells
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<f64>>>) -> Self {
        let columns: Vec<String> = columns.iter().map(|c| normalize_header(c)).collect();
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, None);
                row
            })
            .collect();
        Self { columns, rows }
    }

    pub fn from_json(json: &str) -> ScoringResult<Self> {
        let document: NormTableDocument = serde_json::from_str(json)?;
        Ok(Self::new(document.columns, document.rows))
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.column_index(column).is_some()
    }

    fn column_index(&self, column: &str) -> Option<usize> {
        let wanted = normalize_header(column);
        self.columns.iter().position(|c| *c == wanted)
    }

    /// Value of `column` in the first row whose raw score equals `raw`
    pub fn lookup(&self, column: &str, raw: i64) -> ScoringResult<i64> {
        let value_index = self
            .column_index(column)
            .ok_or_else(|| ScoringError::MissingColumn {
                column: normalize_header(column),
            })?;
        let raw_index = self
            .column_index(RAW_SCORE_COLUMN)
            .ok_or(ScoringError::MissingRawScoreColumn)?;

        let row = self
            .rows
            .iter()
            .find(|row| row[raw_index] == Some(raw as f64))
            .ok_or(ScoringError::RawScoreNotFound { raw })?;

        match row[value_index] {
            Some(value) if value.is_finite() => Ok(value as i64),
            _ => Err(ScoringError::EmptyScore {
                column: normalize_header(column),
                raw,
            }),
        }
    }
}
