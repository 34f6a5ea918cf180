//! Boundary between untrusted records and the dashboard.
//!
//! [`normalize`] accepts whatever a model returned (or a heuristic result)
//! and always yields a complete [`AssessmentRecord`]: missing or malformed
//! fields take cautious defaults, numbers are clamped, and the
//! classification is recomputed from the probability. Repairs are not
//! errors and never set the record's `error` field.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use strokesense_core::models::action::RecommendedAction;
use strokesense_core::models::assessment::{
    AssessmentRecord, DifferentialEntry, KeyPhrase, TpaAssessment,
};
use strokesense_core::models::classification::{Classification, Likelihood};
use strokesense_core::models::eligibility::Eligibility;
use strokesense_core::partial::{PartialRecord, json_kind};
use strokesense_core::thresholds::{
    LKW_NOT_DOCUMENTED, MAX_PROBABILITY, MAX_URGENCY, MIN_PROBABILITY, MIN_URGENCY,
    TIME_FROM_LKW_UNKNOWN,
};

pub const DEFAULT_PROBABILITY: u8 = 50;
pub const DEFAULT_URGENCY: u8 = 3;
const DEFAULT_IMPRESSION: &str = "Analysis incomplete";
const DEFAULT_URGENCY_RATIONALE: &str = "Requires further evaluation";
const DEFAULT_MISSING_INFO: &str = "Full assessment required";

const ERROR_IMPRESSION: &str = "Analysis error - manual review required";
const ERROR_URGENCY_RATIONALE: &str = "Manual review required due to analysis error";
const ERROR_MISSING_INFO: &str = "Analysis failed";

/// Produce a valid record from an untrusted partial record. Never fails.
pub fn normalize(raw: &PartialRecord) -> AssessmentRecord {
    let stroke_probability = bounded_int(
        raw,
        "stroke_probability",
        MIN_PROBABILITY,
        MAX_PROBABILITY,
        DEFAULT_PROBABILITY,
    );
    let urgency_score = bounded_int(raw, "urgency_score", MIN_URGENCY, MAX_URGENCY, DEFAULT_URGENCY);

    // Any upstream classification is discarded.
    let classification = Classification::from_probability(stroke_probability);

    AssessmentRecord {
        stroke_probability,
        classification,
        primary_impression: string_field(raw, "primary_impression", DEFAULT_IMPRESSION),
        key_phrases: list_field(raw, "key_phrases", key_phrase),
        stroke_indicators: list_field(raw, "stroke_indicators", list_string),
        mimic_indicators: list_field(raw, "mimic_indicators", list_string),
        tpa_assessment: tpa_field(raw),
        lkw_time: string_field(raw, "lkw_time", LKW_NOT_DOCUMENTED),
        urgency_score,
        urgency_rationale: string_field(raw, "urgency_rationale", DEFAULT_URGENCY_RATIONALE),
        flags: list_field(raw, "flags", list_string),
        differential_diagnosis: list_field(raw, "differential_diagnosis", differential_entry),
        recommended_action: action_field(raw),
        error: raw.get("error").and_then(Value::as_str).map(str::to_string),
    }
}

/// Normalize any JSON value; non-objects are treated as an empty record.
pub fn normalize_value(raw: &Value) -> AssessmentRecord {
    match raw {
        Value::Object(map) => normalize(map),
        other => {
            debug!(kind = json_kind(other), "normalizing non-object as empty record");
            normalize(&Map::new())
        }
    }
}

/// Run an already-typed record back through [`normalize`].
pub fn renormalize(record: AssessmentRecord) -> AssessmentRecord {
    match serde_json::to_value(&record) {
        Ok(value) => normalize_value(&value),
        Err(e) => {
            warn!(error = %e, "record could not be re-serialized, returning it unchanged");
            record
        }
    }
}

/// Degraded record for when the model call or its parsing failed outright.
///
/// Same cautious skeleton as the normalizer defaults, with `error` set and
/// the message repeated as a flag so the dashboard shows it.
pub fn error_response(message: &str) -> AssessmentRecord {
    AssessmentRecord {
        stroke_probability: DEFAULT_PROBABILITY,
        classification: Classification::from_probability(DEFAULT_PROBABILITY),
        primary_impression: ERROR_IMPRESSION.to_string(),
        key_phrases: Vec::new(),
        stroke_indicators: Vec::new(),
        mimic_indicators: Vec::new(),
        tpa_assessment: uncertain_tpa(ERROR_MISSING_INFO),
        lkw_time: LKW_NOT_DOCUMENTED.to_string(),
        urgency_score: DEFAULT_URGENCY,
        urgency_rationale: ERROR_URGENCY_RATIONALE.to_string(),
        flags: vec![format!("⚠️ {message}")],
        differential_diagnosis: Vec::new(),
        recommended_action: RecommendedAction::ConsiderStrokeAlert,
        error: Some(message.to_string()),
    }
}

fn uncertain_tpa(missing_info: &str) -> TpaAssessment {
    TpaAssessment {
        eligible: Eligibility::Uncertain,
        contraindications_found: Vec::new(),
        contraindications_missing_info: vec![missing_info.to_string()],
        time_from_lkw: TIME_FROM_LKW_UNKNOWN.to_string(),
    }
}

fn repaired(field: &str) {
    debug!(field, "field missing or malformed, using default");
}

/// Loose integer coercion: numbers truncate toward zero, numeric strings
/// parse, booleans count as 0/1.
fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i64)
            })
        }
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

fn bounded_int(raw: &PartialRecord, key: &str, min: u8, max: u8, default: u8) -> u8 {
    match raw.get(key).and_then(coerce_int) {
        Some(n) => n.clamp(i64::from(min), i64::from(max)) as u8,
        None => {
            repaired(key);
            default
        }
    }
}

fn string_field(raw: &PartialRecord, key: &str, default: &str) -> String {
    match raw.get(key).and_then(Value::as_str) {
        Some(s) => s.to_string(),
        None => {
            repaired(key);
            default.to_string()
        }
    }
}

/// Read a list field element by element, dropping elements `item` rejects.
/// A bare scalar is treated as a one-element list.
fn list_field<T>(raw: &PartialRecord, key: &str, item: fn(&Value) -> Option<T>) -> Vec<T> {
    match raw.get(key) {
        Some(Value::Array(values)) => values.iter().filter_map(item).collect(),
        Some(Value::Null) | None => {
            repaired(key);
            Vec::new()
        }
        Some(other) => item(other).into_iter().collect(),
    }
}

fn list_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn key_phrase(value: &Value) -> Option<KeyPhrase> {
    match value {
        Value::String(s) => Some(KeyPhrase {
            phrase: s.clone(),
            significance: String::new(),
        }),
        Value::Object(map) => {
            let phrase = map.get("phrase").and_then(Value::as_str)?;
            Some(KeyPhrase {
                phrase: phrase.to_string(),
                significance: map
                    .get("significance")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            })
        }
        _ => None,
    }
}

/// Accepts `{diagnosis, likelihood}` and the `{condition, probability}`
/// shape some prompts ask for.
fn differential_entry(value: &Value) -> Option<DifferentialEntry> {
    let map = value.as_object()?;
    let diagnosis = map
        .get("diagnosis")
        .or_else(|| map.get("condition"))
        .and_then(Value::as_str)?;
    let likelihood = map
        .get("likelihood")
        .or_else(|| map.get("probability"))
        .and_then(Value::as_str)
        .and_then(Likelihood::parse_lenient)
        .unwrap_or(Classification::Medium);

    Some(DifferentialEntry {
        diagnosis: diagnosis.to_string(),
        likelihood,
    })
}

fn tpa_field(raw: &PartialRecord) -> TpaAssessment {
    let Some(tpa) = raw.get("tpa_assessment").and_then(Value::as_object) else {
        repaired("tpa_assessment");
        return uncertain_tpa(DEFAULT_MISSING_INFO);
    };

    let found_key = if tpa.contains_key("contraindications_found") {
        "contraindications_found"
    } else {
        "contraindications"
    };

    TpaAssessment {
        eligible: tpa
            .get("eligible")
            .map(Eligibility::from_json)
            .unwrap_or_default(),
        contraindications_found: list_field(tpa, found_key, list_string),
        contraindications_missing_info: match tpa.get("contraindications_missing_info") {
            Some(_) => list_field(tpa, "contraindications_missing_info", list_string),
            None => vec![DEFAULT_MISSING_INFO.to_string()],
        },
        time_from_lkw: string_field(tpa, "time_from_lkw", TIME_FROM_LKW_UNKNOWN),
    }
}

fn action_field(raw: &PartialRecord) -> RecommendedAction {
    match raw.get("recommended_action").and_then(Value::as_str) {
        Some(code) => RecommendedAction::from(code.trim().to_string()),
        None => {
            repaired("recommended_action");
            RecommendedAction::default()
        }
    }
}
