use serde_json::json;

use strokesense_core::error::CoreError;
use strokesense_core::models::action::RecommendedAction;
use strokesense_core::models::assessment::{AssessmentRecord, DifferentialEntry, KeyPhrase, TpaAssessment};
use strokesense_core::models::classification::Classification;
use strokesense_core::models::eligibility::Eligibility;
use strokesense_core::partial::parse_partial;
use strokesense_core::thresholds::urgency_descriptor;

fn sample_record() -> AssessmentRecord {
    AssessmentRecord {
        stroke_probability: 87,
        classification: Classification::High,
        primary_impression: "Strong stroke presentation based on clinical features".to_string(),
        key_phrases: vec![KeyPhrase {
            phrase: "facial droop".to_string(),
            significance: "stroke indicator".to_string(),
        }],
        stroke_indicators: vec!["facial droop".to_string()],
        mimic_indicators: vec![],
        tpa_assessment: TpaAssessment {
            eligible: Eligibility::Eligible,
            contraindications_found: vec![],
            contraindications_missing_info: vec!["INR value".to_string()],
            time_from_lkw: "14:00".to_string(),
        },
        lkw_time: "14:00".to_string(),
        urgency_score: 5,
        urgency_rationale: "Based on 87% stroke probability and no contraindications".to_string(),
        flags: vec![],
        differential_diagnosis: vec![DifferentialEntry {
            diagnosis: "Ischemic Stroke".to_string(),
            likelihood: Classification::High,
        }],
        recommended_action: RecommendedAction::ActivateStrokeAlert,
        error: None,
    }
}

#[test]
fn classification_thresholds() {
    assert_eq!(Classification::from_probability(100), Classification::High);
    assert_eq!(Classification::from_probability(80), Classification::High);
    assert_eq!(Classification::from_probability(79), Classification::Medium);
    assert_eq!(Classification::from_probability(50), Classification::Medium);
    assert_eq!(Classification::from_probability(49), Classification::Low);
    assert_eq!(Classification::from_probability(0), Classification::Low);
}

#[test]
fn inverse_swaps_high_and_low_only() {
    assert_eq!(Classification::High.inverse(), Classification::Low);
    assert_eq!(Classification::Low.inverse(), Classification::High);
    assert_eq!(Classification::Medium.inverse(), Classification::Medium);
}

#[test]
fn lenient_level_parsing() {
    assert_eq!(Classification::parse_lenient(" high "), Some(Classification::High));
    assert_eq!(Classification::parse_lenient("Medium"), Some(Classification::Medium));
    assert_eq!(Classification::parse_lenient("low"), Some(Classification::Low));
    assert_eq!(Classification::parse_lenient("certain"), None);
}

#[test]
fn eligibility_serializes_as_bool_or_uncertain() {
    assert_eq!(serde_json::to_value(Eligibility::Eligible).unwrap(), json!(true));
    assert_eq!(serde_json::to_value(Eligibility::Contraindicated).unwrap(), json!(false));
    assert_eq!(serde_json::to_value(Eligibility::Uncertain).unwrap(), json!("uncertain"));
}

#[test]
fn eligibility_reads_loose_values() {
    let read = |v: serde_json::Value| serde_json::from_value::<Eligibility>(v).unwrap();
    assert_eq!(read(json!(true)), Eligibility::Eligible);
    assert_eq!(read(json!(false)), Eligibility::Contraindicated);
    assert_eq!(read(json!("TRUE")), Eligibility::Eligible);
    assert_eq!(read(json!("unknown")), Eligibility::Uncertain);
    assert_eq!(read(json!(null)), Eligibility::Uncertain);
    assert_eq!(read(json!(1)), Eligibility::Uncertain);
}

#[test]
fn recommended_action_accepts_both_vocabularies() {
    let heuristic: RecommendedAction = serde_json::from_value(json!("ACTIVATE_STROKE_ALERT")).unwrap();
    assert_eq!(heuristic, RecommendedAction::ActivateStrokeAlert);

    let model: RecommendedAction = serde_json::from_value(json!("URGENT_NEURO_CONSULT")).unwrap();
    assert_eq!(model, RecommendedAction::UrgentNeuroConsult);
    assert!(model.is_known());
}

#[test]
fn unknown_recommended_action_passes_through() {
    let action: RecommendedAction = serde_json::from_value(json!("CALL_NEUROSURGERY")).unwrap();
    assert_eq!(action, RecommendedAction::Other("CALL_NEUROSURGERY".to_string()));
    assert!(!action.is_known());
    assert_eq!(serde_json::to_value(&action).unwrap(), json!("CALL_NEUROSURGERY"));
}

#[test]
fn record_wire_shape() {
    let value = serde_json::to_value(sample_record()).unwrap();

    assert_eq!(value["classification"], json!("HIGH"));
    assert_eq!(value["tpa_assessment"]["eligible"], json!(true));
    assert_eq!(value["recommended_action"], json!("ACTIVATE_STROKE_ALERT"));
    assert_eq!(value["differential_diagnosis"][0]["likelihood"], json!("HIGH"));
    assert!(value.get("error").is_none(), "error is omitted when absent");
}

#[test]
fn degraded_record_carries_error_field() {
    let mut record = sample_record();
    record.error = Some("timeout".to_string());
    assert!(record.is_degraded());

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["error"], json!("timeout"));

    let back: AssessmentRecord = serde_json::from_value(value).unwrap();
    assert_eq!(back, record);
}

#[test]
fn parse_partial_accepts_objects() {
    let partial = parse_partial(r#"{"stroke_probability": 70}"#).unwrap();
    assert_eq!(partial["stroke_probability"], json!(70));
}

#[test]
fn parse_partial_rejects_non_objects() {
    assert!(matches!(
        parse_partial("[1, 2, 3]"),
        Err(CoreError::NotAnObject("an array"))
    ));
    assert!(matches!(
        parse_partial("not json"),
        Err(CoreError::Serialization(_))
    ));
}

#[test]
fn urgency_descriptors_cover_every_score() {
    for score in 1..=5 {
        assert!(urgency_descriptor(score).is_some(), "missing descriptor for {score}");
    }
    assert_eq!(urgency_descriptor(0), None);
    assert_eq!(urgency_descriptor(6), None);
}
