use std::collections::BTreeMap;

use dioxus::prelude::*;

use crate::components::display::{ErrorBanner, LoadingIndicator};
use crate::components::inputs::{InputType, ValidatedInput};
use crate::records::AnswerSumRequest;
use crate::services::errors::IntakeError;
use crate::services::scoring::{
    score_assessment, RawScores, Scale, ScoreReport, SharedNormTableSource, SCALES,
};
use crate::{console_info, console_warn};

/// Raw score fields as typed; blank fields are left out of the report
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawScoreForm {
    pub total: String,
    pub isci: String,
    pub fi: String,
    pub emi: String,
    pub scales: BTreeMap<Scale, String>,
}

impl RawScoreForm {
    /// Start from the answer sum of the record
    pub fn for_record(record: &AnswerSumRequest) -> Self {
        Self {
            total: record.raw_total().to_string(),
            ..Self::default()
        }
    }

    pub fn scale(&self, scale: Scale) -> String {
        self.scales.get(&scale).cloned().unwrap_or_default()
    }

    pub fn to_raw_scores(&self) -> Result<RawScores, String> {
        let mut scales = BTreeMap::new();
        for scale in SCALES {
            if let Some(value) = parse_field(scale.label(), &self.scale(scale))? {
                scales.insert(scale, value);
            }
        }

        Ok(RawScores {
            total: parse_field("Total", &self.total)?,
            isci: parse_field("ISCI", &self.isci)?,
            fi: parse_field("FI", &self.fi)?,
            emi: parse_field("EMI", &self.emi)?,
            scales,
        })
    }
}

fn parse_field(label: &str, value: &str) -> Result<Option<i64>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<i64>()
        .map(Some)
        .map_err(|_| format!("{} must be a whole number", label))
}

/// Label/score rows of a report, in display order
pub fn report_rows(report: &ScoreReport) -> Vec<(String, i64)> {
    let mut rows = Vec::new();
    let composites = [
        ("Total", report.total_score),
        ("ISCI", report.isci_score),
        ("FI", report.fi_score),
        ("EMI", report.emi_score),
    ];
    for (label, score) in composites {
        if let Some(score) = score {
            rows.push((label.to_string(), score));
        }
    }
    for scale in SCALES {
        if let Some(score) = report.scale_score(scale) {
            rows.push((scale.label().to_string(), score));
        }
    }
    rows
}

#[derive(Props, PartialEq, Clone)]
pub struct ScorePanelProps {
    pub record: AnswerSumRequest,
    pub norms: SharedNormTableSource,
    pub on_close: EventHandler<()>,
}

#[component]
pub fn ScorePanel(props: ScorePanelProps) -> Element {
    let record = props.record.clone();
    let on_close = props.on_close;
    let mut form = use_signal(|| RawScoreForm::for_record(&record));
    let mut form_error = use_signal(|| None::<String>);
    let mut report = use_signal(|| None::<ScoreReport>);
    let mut failure = use_signal(|| None::<IntakeError>);
    let mut scoring = use_signal(|| false);

    let title = format!(
        "{} ({}, {} years, {} / {})",
        record.patient_name,
        record.gender.as_str(),
        record.age,
        record.respondent.as_str(),
        record.setting.as_str()
    );

    let run_score = {
        let record = record.clone();
        let norms = props.norms.clone();
        move |_: MouseEvent| {
            let raw = match form().to_raw_scores() {
                Ok(raw) => raw,
                Err(message) => {
                    form_error.set(Some(message));
                    return;
                }
            };
            form_error.set(None);
            failure.set(None);
            scoring.set(true);

            let record = record.clone();
            let norms = norms.clone();
            spawn(async move {
                match score_assessment(norms.source(), &record, &raw).await {
                    Ok(result) => {
                        console_info!("Scored assessment for {}", record.patient_id);
                        report.set(Some(result));
                    }
                    Err(e) => {
                        console_warn!("Scoring failed for {}: {}", record.patient_id, e);
                        report.set(None);
                        failure.set(Some(IntakeError::from(e)));
                    }
                }
                scoring.set(false);
            });
        }
    };

    rsx! {
        div {
            class: "score-panel",

            div {
                class: "score-header",
                h3 { "{title}" }
                button {
                    class: "close-button",
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }

            div {
                class: "score-inputs",
                ValidatedInput {
                    label: "Total".to_string(),
                    value: form().total,
                    placeholder: "Raw total".to_string(),
                    input_type: InputType::Number,
                    on_change: move |value: String| form.with_mut(|f| f.total = value),
                }
                ValidatedInput {
                    label: "ISCI".to_string(),
                    value: form().isci,
                    placeholder: "Raw ISCI".to_string(),
                    input_type: InputType::Number,
                    on_change: move |value: String| form.with_mut(|f| f.isci = value),
                }
                ValidatedInput {
                    label: "FI".to_string(),
                    value: form().fi,
                    placeholder: "Raw FI".to_string(),
                    input_type: InputType::Number,
                    on_change: move |value: String| form.with_mut(|f| f.fi = value),
                }
                ValidatedInput {
                    label: "EMI".to_string(),
                    value: form().emi,
                    placeholder: "Raw EMI".to_string(),
                    input_type: InputType::Number,
                    on_change: move |value: String| form.with_mut(|f| f.emi = value),
                }
                for scale in SCALES {
                    ValidatedInput {
                        key: "{scale.column()}",
                        label: scale.label().to_string(),
                        value: form().scale(scale),
                        placeholder: "Raw score".to_string(),
                        input_type: InputType::Number,
                        on_change: move |value: String| form.with_mut(|f| {
                            f.scales.insert(scale, value);
                        }),
                    }
                }
            }

            if let Some(message) = form_error() {
                div { class: "validation-feedback", "{message}" }
            }

            button {
                class: "primary-button",
                disabled: scoring(),
                onclick: run_score,
                if scoring() { "Scoring..." } else { "Score" }
            }

            if scoring() {
                LoadingIndicator { message: "Loading norm tables...".to_string() }
            }

            if let Some(error) = failure() {
                ErrorBanner { error }
            }

            if let Some(result) = report() {
                if result.is_empty() {
                    p { class: "score-empty", "Enter at least one raw score." }
                } else {
                    table {
                        class: "score-table",
                        thead {
                            tr {
                                th { "Scale" }
                                th { "T score" }
                            }
                        }
                        tbody {
                            for (label, score) in report_rows(&result) {
                                tr {
                                    key: "{label}",
                                    td { "{label}" }
                                    td { "{score}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{sample_record, Status};

    #[test]
    fn test_form_starts_from_answer_sum() {
        let mut record = sample_record("Ada", "2024-01-01", Status::Completed);
        record.answers = vec![1, 2, 3];
        let form = RawScoreForm::for_record(&record);
        assert_eq!(form.total, "6");
        assert!(form.isci.is_empty());
    }

    #[test]
    fn test_blank_fields_are_omitted() {
        let form = RawScoreForm {
            total: " 42 ".to_string(),
            ..RawScoreForm::default()
        };
        let raw = form.to_raw_scores().unwrap();
        assert_eq!(raw.total, Some(42));
        assert_eq!(raw.isci, None);
        assert!(raw.scales.is_empty());
    }

    #[test]
    fn test_scale_fields_are_parsed() {
        let mut form = RawScoreForm::default();
        form.scales.insert(Scale::WorkingMemory, "17".to_string());
        form.scales.insert(Scale::Shifting, "".to_string());
        let raw = form.to_raw_scores().unwrap();
        assert_eq!(raw.scales.get(&Scale::WorkingMemory), Some(&17));
        assert!(!raw.scales.contains_key(&Scale::Shifting));
    }

    #[test]
    fn test_non_numeric_field_is_rejected() {
        let form = RawScoreForm {
            fi: "abc".to_string(),
            ..RawScoreForm::default()
        };
        assert_eq!(
            form.to_raw_scores().unwrap_err(),
            "FI must be a whole number"
        );
    }

    #[test]
    fn test_report_rows_follow_display_order() {
        let mut report = ScoreReport {
            total_score: Some(55),
            emi_score: Some(61),
            ..ScoreReport::default()
        };
        report
            .scale_scores
            .insert(Scale::PlanOrganize.report_key(), 48);
        report
            .scale_scores
            .insert(Scale::Inhibition.report_key(), 52);

        let labels: Vec<String> = report_rows(&report).into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Total", "EMI", "Inhibition", "Plan/Organize"]);
    }
}
