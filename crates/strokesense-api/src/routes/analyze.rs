use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;

use strokesense_bedrock::assess::assess_note;
use strokesense_core::models::assessment::AssessmentRecord;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub note: String,
    /// Overrides the configured model for this request.
    #[serde(default)]
    pub model_id: Option<String>,
}

/// Analyze an ED note for stroke risk.
///
/// Always answers with a complete assessment; model failures surface as a
/// flagged record, not an HTTP error.
pub async fn analyze_note(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AssessmentRecord>, ApiError> {
    let Json(req) = payload?;
    if req.note.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Note content cannot be empty".to_string(),
        ));
    }

    let model = state.model_for(req.model_id.as_deref());
    let outcome = assess_note(model.as_ref(), &req.note, state.on_model_failure).await;

    tracing::info!(
        transaction_id = %outcome.id,
        source = ?outcome.source,
        classification = %outcome.record.classification,
        degraded = outcome.record.is_degraded(),
        "analysis served"
    );

    Ok(Json(outcome.record))
}
