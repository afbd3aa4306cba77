// Static column and status tables - no dioxus imports needed here
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Unknown status uid: {0}")]
    UnknownStatus(String),

    #[error("Unknown column uid: {0}")]
    UnknownColumn(String),
}

/// Workflow state of an assessment record, serialized by uid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Completed,
    InProgress,
    Pending,
    Cancelled,
}

impl Status {
    pub fn name(&self) -> &'static str {
        match self {
            Status::Completed => "COMPLETED",
            Status::InProgress => "IN PROGRESS",
            Status::Pending => "PENDING",
            Status::Cancelled => "CANCELLED",
        }
    }

    /// Stable identifier matched against the `status` field of a record
    pub fn uid(&self) -> &'static str {
        match self {
            Status::Completed => "completed",
            Status::InProgress => "in_progress",
            Status::Pending => "pending",
            Status::Cancelled => "cancelled",
        }
    }

    pub fn from_uid(uid: &str) -> Result<Self, CatalogError> {
        STATUS_OPTIONS
            .iter()
            .copied()
            .find(|status| status.uid() == uid)
            .ok_or_else(|| CatalogError::UnknownStatus(uid.to_string()))
    }

    /// CSS modifier used by the status chip
    pub fn css_class(&self) -> &'static str {
        match self {
            Status::Completed => "status-chip success",
            Status::InProgress => "status-chip primary",
            Status::Pending => "status-chip warning",
            Status::Cancelled => "status-chip danger",
        }
    }
}

/// Records table column
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    PatientName,
    DiagnosisDate,
    Status,
    /// Non-data column holding the per-row controls
    Actions,
}

impl Column {
    pub fn name(&self) -> &'static str {
        match self {
            Column::PatientName => "PATIENT NAME",
            Column::DiagnosisDate => "DIAGNOSIS DATE",
            Column::Status => "STATUS",
            Column::Actions => "ACTIONS",
        }
    }

    /// Record field key, or the `actions` sentinel
    pub fn uid(&self) -> &'static str {
        match self {
            Column::PatientName => "patientName",
            Column::DiagnosisDate => "diagnosisDate",
            Column::Status => "status",
            Column::Actions => "actions",
        }
    }

    pub fn from_uid(uid: &str) -> Result<Self, CatalogError> {
        COLUMNS
            .iter()
            .copied()
            .find(|column| column.uid() == uid)
            .ok_or_else(|| CatalogError::UnknownColumn(uid.to_string()))
    }

    pub fn is_data(&self) -> bool {
        !matches!(self, Column::Actions)
    }

    pub fn sortable(&self) -> bool {
        self.is_data()
    }
}

pub const COLUMNS: [Column; 4] = [
    Column::PatientName,
    Column::DiagnosisDate,
    Column::Status,
    Column::Actions,
];

pub const STATUS_OPTIONS: [Status; 4] = [
    Status::Completed,
    Status::InProgress,
    Status::Pending,
    Status::Cancelled,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_columns_catalog() {
        assert_eq!(COLUMNS.len(), 4);

        let uids: HashSet<&str> = COLUMNS.iter().map(|c| c.uid()).collect();
        let expected: HashSet<&str> = ["patientName", "diagnosisDate", "status", "actions"]
            .into_iter()
            .collect();
        assert_eq!(uids, expected);

        for column in COLUMNS {
            assert!(!column.name().is_empty());
        }
    }

    #[test]
    fn test_status_catalog() {
        assert_eq!(STATUS_OPTIONS.len(), 4);

        let uids: Vec<&str> = STATUS_OPTIONS.iter().map(|s| s.uid()).collect();
        let distinct: HashSet<&str> = uids.iter().copied().collect();
        assert_eq!(distinct.len(), uids.len());
        assert_eq!(uids, vec!["completed", "in_progress", "pending", "cancelled"]);

        for status in STATUS_OPTIONS {
            assert!(!status.name().is_empty());
        }
    }

    #[test]
    fn test_lookup_by_uid() {
        assert_eq!(Status::from_uid("in_progress"), Ok(Status::InProgress));
        assert_eq!(Column::from_uid("actions"), Ok(Column::Actions));
        assert_eq!(
            Status::from_uid("archived"),
            Err(CatalogError::UnknownStatus("archived".to_string()))
        );
        assert!(Column::from_uid("avatar").is_err());
    }

    #[test]
    fn test_only_actions_is_not_data() {
        let data: Vec<Column> = COLUMNS.iter().copied().filter(Column::is_data).collect();
        assert_eq!(
            data,
            vec![Column::PatientName, Column::DiagnosisDate, Column::Status]
        );
    }

    #[test]
    fn test_status_serde_uses_uid() {
        let json = serde_json::to_string(&Status::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");

        let parsed: Status = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(parsed, Status::Cancelled);

        assert!(serde_json::from_str::<Status>("\"IN PROGRESS\"").is_err());

        for status in STATUS_OPTIONS {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.uid()));
        }
    }
}
