use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::action::RecommendedAction;
use super::classification::{Classification, Likelihood};
use super::eligibility::Eligibility;

/// The structured stroke-triage assessment of one ED note.
///
/// Field names are the wire contract consumed by the dashboard. A record is
/// built fresh per request and never mutated after it is handed out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRecord {
    /// 0..=100.
    pub stroke_probability: u8,
    /// Always derived from `stroke_probability`.
    pub classification: Classification,
    pub primary_impression: String,
    /// Relevance-first.
    pub key_phrases: Vec<KeyPhrase>,
    pub stroke_indicators: Vec<String>,
    pub mimic_indicators: Vec<String>,
    pub tpa_assessment: TpaAssessment,
    pub lkw_time: String,
    /// 1..=5.
    pub urgency_score: u8,
    pub urgency_rationale: String,
    pub flags: Vec<String>,
    pub differential_diagnosis: Vec<DifferentialEntry>,
    #[ts(type = "string")]
    pub recommended_action: RecommendedAction,
    /// Set only on degraded responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub error: Option<String>,
}

impl AssessmentRecord {
    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct KeyPhrase {
    pub phrase: String,
    pub significance: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TpaAssessment {
    #[ts(type = "boolean | \"uncertain\"")]
    pub eligible: Eligibility,
    pub contraindications_found: Vec<String>,
    pub contraindications_missing_info: Vec<String>,
    pub time_from_lkw: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DifferentialEntry {
    pub diagnosis: String,
    pub likelihood: Likelihood,
}
