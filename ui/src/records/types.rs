// Core record types - no dioxus imports needed here
use serde::{Deserialize, Serialize};

use super::catalog::{Column, Status};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[serde(alias = "Male", alias = "MALE")]
    Male,
    #[serde(alias = "Female", alias = "FEMALE")]
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Who filled in the questionnaire (`pORt` on the wire)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Respondent {
    Parent,
    Teacher,
}

impl Respondent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Respondent::Parent => "parent",
            Respondent::Teacher => "teacher",
        }
    }
}

/// Questionnaire context (`kORs` on the wire)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Setting {
    Kids,
    School,
}

impl Setting {
    pub fn as_str(&self) -> &'static str {
        match self {
            Setting::Kids => "kids",
            Setting::School => "school",
        }
    }
}

/// One submitted assessment, field names kept as the backend emits them
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnswerSumRequest {
    #[serde(rename = "patientName")]
    pub patient_name: String,
    pub patient_id: String,
    pub gender: Gender,
    pub age: f64,
    pub birth_date: String,
    pub text_filler_name: String,
    #[serde(rename = "diagnosisDate")]
    pub diagnosis_date: String,
    #[serde(rename = "pORt")]
    pub respondent: Respondent,
    #[serde(rename = "kORs")]
    pub setting: Setting,
    #[serde(default)]
    pub answers: Vec<i64>,
    pub status: Status,
    #[serde(default)]
    pub avatar: String,
}

impl AnswerSumRequest {
    /// Raw total: the plain sum of every answer
    pub fn raw_total(&self) -> i64 {
        self.answers.iter().sum()
    }

    /// Project the record onto a table cell; the actions column has no text
    pub fn cell(&self, column: Column) -> Option<String> {
        match column {
            Column::PatientName => Some(self.patient_name.clone()),
            Column::DiagnosisDate => Some(self.diagnosis_date.clone()),
            Column::Status => Some(self.status.name().to_string()),
            Column::Actions => None,
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_record(name: &str, date: &str, status: Status) -> AnswerSumRequest {
    AnswerSumRequest {
        patient_name: name.to_string(),
        patient_id: format!("p-{}", name.to_lowercase()),
        gender: Gender::Female,
        age: 8.5,
        birth_date: "2016-04-02".to_string(),
        text_filler_name: "Grace".to_string(),
        diagnosis_date: date.to_string(),
        respondent: Respondent::Parent,
        setting: Setting::Kids,
        answers: vec![1, 2, 3, 2, 1],
        status,
        avatar: String::new(),
    }
}
