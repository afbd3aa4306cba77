use std::collections::BTreeMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::errors::{ScoringError, ScoringResult};
use super::norm_table::{NormTable, NormTableKind, T_SCORE_COLUMN};

/// Clinical scales reported from the normal table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Scale {
    #[serde(rename = "inhibition")]
    Inhibition,
    #[serde(rename = "shifting")]
    Shifting,
    #[serde(rename = "emotional control")]
    EmotionalControl,
    #[serde(rename = "working memory")]
    WorkingMemory,
    #[serde(rename = "plan/org")]
    PlanOrganize,
}

pub const SCALES: [Scale; 5] = [
    Scale::Inhibition,
    Scale::Shifting,
    Scale::EmotionalControl,
    Scale::WorkingMemory,
    Scale::PlanOrganize,
];

impl Scale {
    /// Column header in the normal table
    pub fn column(&self) -> &'static str {
        match self {
            Scale::Inhibition => "inhibition",
            Scale::Shifting => "shifting",
            Scale::EmotionalControl => "emotional control",
            Scale::WorkingMemory => "working memory",
            Scale::PlanOrganize => "plan/org",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Scale::Inhibition => "Inhibition",
            Scale::Shifting => "Shifting",
            Scale::EmotionalControl => "Emotional Control",
            Scale::WorkingMemory => "Working Memory",
            Scale::PlanOrganize => "Plan/Organize",
        }
    }

    pub fn report_key(&self) -> String {
        format!("{}_score", self.column())
    }
}

/// Raw scores entered for one assessment
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawScores {
    pub total: Option<i64>,
    pub isci: Option<i64>,
    pub fi: Option<i64>,
    pub emi: Option<i64>,
    #[serde(default)]
    pub scales: BTreeMap<Scale, i64>,
}

impl RawScores {
    /// The three composites are only reported together
    pub fn composites(&self) -> Option<(i64, i64, i64)> {
        match (self.isci, self.fi, self.emi) {
            (Some(isci), Some(fi), Some(emi)) => Some((isci, fi, emi)),
            _ => None,
        }
    }

    /// Norm tables needed to score these raw values
    pub fn required_tables(&self) -> Vec<NormTableKind> {
        let mut kinds = Vec::new();
        if self.total.is_some() {
            kinds.push(NormTableKind::Total);
        }
        if self.composites().is_some() {
            kinds.push(NormTableKind::Combined);
        }
        if !self.scales.is_empty() {
            kinds.push(NormTableKind::Normal);
        }
        kinds
    }
}

/// Normed scores; only the scores whose raw inputs were given are present
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isci_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fi_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emi_score: Option<i64>,
    /// Keyed `<scale>_score`, e.g. `working memory_score`
    #[serde(flatten)]
    pub scale_scores: BTreeMap<String, i64>,
}

impl ScoreReport {
    pub fn scale_score(&self, scale: Scale) -> Option<i64> {
        self.scale_scores.get(&scale.report_key()).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.total_score.is_none()
            && self.isci_score.is_none()
            && self.fi_score.is_none()
            && self.emi_score.is_none()
            && self.scale_scores.is_empty()
    }
}

/// The tables of one norm group; a kind that is not needed may be absent.
/// Tables are shared with the cache that loaded them.
#[derive(Clone, Debug, Default)]
pub struct NormTables {
    pub total: Option<Rc<NormTable>>,
    pub combined: Option<Rc<NormTable>>,
    pub normal: Option<Rc<NormTable>>,
}

impl NormTables {
    pub fn set(&mut self, kind: NormTableKind, table: impl Into<Rc<NormTable>>) {
        let table = table.into();
        match kind {
            NormTableKind::Total => self.total = Some(table),
            NormTableKind::Combined => self.combined = Some(table),
            NormTableKind::Normal => self.normal = Some(table),
        }
    }

    fn get(&self, kind: NormTableKind) -> ScoringResult<&NormTable> {
        let table = match kind {
            NormTableKind::Total => self.total.as_deref(),
            NormTableKind::Combined => self.combined.as_deref(),
            NormTableKind::Normal => self.normal.as_deref(),
        };
        table.ok_or_else(|| ScoringError::NotFound {
            path: kind.as_str().to_string(),
        })
    }
}

/// Convert raw scores into normed scores
pub fn score(raw: &RawScores, tables: &NormTables) -> ScoringResult<ScoreReport> {
    let mut report = ScoreReport::default();

    if let Some(total) = raw.total {
        report.total_score = Some(tables.get(NormTableKind::Total)?.lookup(T_SCORE_COLUMN, total)?);
    }

    if let Some((isci, fi, emi)) = raw.composites() {
        let combined = tables.get(NormTableKind::Combined)?;
        report.isci_score = Some(combined.lookup("isci", isci)?);
        report.fi_score = Some(combined.lookup("fi", fi)?);
        report.emi_score = Some(combined.lookup("emi", emi)?);
    }

    if !raw.scales.is_empty() {
        let normal = tables.get(NormTableKind::Normal)?;
        for (scale, value) in &raw.scales {
            report
                .scale_scores
                .insert(scale.report_key(), normal.lookup(scale.column(), *value)?);
        }
    }

    Ok(report)
}
