use std::fmt;

use serde::{Deserialize, Serialize};

/// Recommended next step for the care team.
///
/// Two vocabularies are in circulation: the heuristic analyzer emits the
/// `*_STROKE_ALERT` / `DEFER_FURTHER_EVALUATION` codes, while some model
/// prompts ask for `STROKE_ALERT` / `URGENT_NEURO_CONSULT` / ... . Codes
/// outside both sets are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecommendedAction {
    ActivateStrokeAlert,
    #[default]
    ConsiderStrokeAlert,
    DeferFurtherEvaluation,
    StrokeAlert,
    UrgentNeuroConsult,
    RoutineEvaluation,
    Observation,
    Other(String),
}

impl RecommendedAction {
    pub fn as_str(&self) -> &str {
        match self {
            RecommendedAction::ActivateStrokeAlert => "ACTIVATE_STROKE_ALERT",
            RecommendedAction::ConsiderStrokeAlert => "CONSIDER_STROKE_ALERT",
            RecommendedAction::DeferFurtherEvaluation => "DEFER_FURTHER_EVALUATION",
            RecommendedAction::StrokeAlert => "STROKE_ALERT",
            RecommendedAction::UrgentNeuroConsult => "URGENT_NEURO_CONSULT",
            RecommendedAction::RoutineEvaluation => "ROUTINE_EVALUATION",
            RecommendedAction::Observation => "OBSERVATION",
            RecommendedAction::Other(code) => code,
        }
    }

    /// Whether the code belongs to either known vocabulary.
    pub fn is_known(&self) -> bool {
        !matches!(self, RecommendedAction::Other(_))
    }
}

impl From<String> for RecommendedAction {
    fn from(code: String) -> Self {
        match code.as_str() {
            "ACTIVATE_STROKE_ALERT" => RecommendedAction::ActivateStrokeAlert,
            "CONSIDER_STROKE_ALERT" => RecommendedAction::ConsiderStrokeAlert,
            "DEFER_FURTHER_EVALUATION" => RecommendedAction::DeferFurtherEvaluation,
            "STROKE_ALERT" => RecommendedAction::StrokeAlert,
            "URGENT_NEURO_CONSULT" => RecommendedAction::UrgentNeuroConsult,
            "ROUTINE_EVALUATION" => RecommendedAction::RoutineEvaluation,
            "OBSERVATION" => RecommendedAction::Observation,
            _ => RecommendedAction::Other(code),
        }
    }
}

impl From<RecommendedAction> for String {
    fn from(action: RecommendedAction) -> Self {
        match action {
            RecommendedAction::Other(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
