//! Choosing between the language model and the heuristic analyzer.
//!
//! Whatever happens upstream, the caller always gets a complete
//! [`AssessmentRecord`]: model output is normalized, model failures become
//! either a heuristic result or a flagged error record.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use strokesense_core::models::assessment::AssessmentRecord;
use strokesense_core::partial::parse_partial;
use strokesense_triage::{analyze, error_response, normalize, renormalize};

use crate::error::ModelError;
use crate::extract::extract_json_block;
use crate::model::ChatModel;
use crate::prompts::{STROKE_TRIAGE_SYSTEM_PROMPT, stroke_triage_user_prompt};

/// What to return when the model path fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// A flagged record asking for manual review.
    #[default]
    ErrorResponse,
    /// The heuristic analyzer's result.
    Heuristic,
}

impl FromStr for FailurePolicy {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" | "error_response" => Ok(FailurePolicy::ErrorResponse),
            "heuristic" => Ok(FailurePolicy::Heuristic),
            other => Err(ModelError::Config(format!(
                "unknown failure policy '{other}', expected 'error' or 'heuristic'"
            ))),
        }
    }
}

/// Which path produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisSource {
    Model,
    Heuristic,
    /// The model path failed and an error record was returned.
    Degraded,
}

/// The result of one triage request, before it is handed to a consumer.
#[derive(Debug, Clone, Serialize)]
pub struct TriageOutcome {
    pub id: Uuid,
    pub source: AnalysisSource,
    pub model_id: Option<String>,
    pub completed_at: jiff::Timestamp,
    pub record: AssessmentRecord,
}

impl TriageOutcome {
    fn new(id: Uuid, source: AnalysisSource, model_id: Option<String>, record: AssessmentRecord) -> Self {
        Self {
            id,
            source,
            model_id,
            completed_at: jiff::Timestamp::now(),
            record,
        }
    }
}

/// Assess a note with the heuristic analyzer only.
pub fn assess_heuristic(note: &str) -> TriageOutcome {
    let id = Uuid::new_v4();
    let record = renormalize(analyze(note));
    info!(
        transaction_id = %id,
        probability = record.stroke_probability,
        "heuristic triage complete"
    );
    TriageOutcome::new(id, AnalysisSource::Heuristic, None, record)
}

/// Assess a note with `model` when one is available, else heuristically.
pub async fn assess_note<M: ChatModel>(
    model: Option<&M>,
    note: &str,
    on_failure: FailurePolicy,
) -> TriageOutcome {
    let Some(model) = model else {
        return assess_heuristic(note);
    };

    let id = Uuid::new_v4();
    let model_id = model.model_id().to_string();
    info!(transaction_id = %id, model = %model_id, "starting model triage");

    match analyze_with_model(model, note).await {
        Ok(record) => {
            info!(
                transaction_id = %id,
                probability = record.stroke_probability,
                "model triage complete"
            );
            TriageOutcome::new(id, AnalysisSource::Model, Some(model_id), record)
        }
        Err(e) => {
            warn!(transaction_id = %id, error = %e, policy = ?on_failure, "model triage failed");
            match on_failure {
                FailurePolicy::ErrorResponse => TriageOutcome::new(
                    id,
                    AnalysisSource::Degraded,
                    Some(model_id),
                    error_response(&e.to_string()),
                ),
                FailurePolicy::Heuristic => TriageOutcome::new(
                    id,
                    AnalysisSource::Heuristic,
                    Some(model_id),
                    renormalize(analyze(note)),
                ),
            }
        }
    }
}

/// Ask `model` for an assessment and normalize what comes back.
pub async fn analyze_with_model<M: ChatModel>(
    model: &M,
    note: &str,
) -> Result<AssessmentRecord, ModelError> {
    let user_prompt = stroke_triage_user_prompt(note);
    let response = model
        .complete(STROKE_TRIAGE_SYSTEM_PROMPT, &user_prompt)
        .await?;

    let json = extract_json_block(&response)?;
    let partial = parse_partial(json)?;
    Ok(normalize(&partial))
}
