use serde_json::{Value, json};

use strokesense_core::models::action::RecommendedAction;
use strokesense_core::models::classification::Classification;
use strokesense_core::models::eligibility::Eligibility;
use strokesense_core::partial::PartialRecord;
use strokesense_triage::{analyze, error_response, normalize, normalize_value, renormalize};

fn partial(value: Value) -> PartialRecord {
    match value {
        Value::Object(map) => map,
        _ => panic!("test fixture must be an object"),
    }
}

#[test]
fn empty_input_gets_cautious_defaults() {
    let record = normalize(&PartialRecord::new());

    assert_eq!(record.stroke_probability, 50);
    assert_eq!(record.classification, Classification::Medium);
    assert_eq!(record.urgency_score, 3);
    assert_eq!(record.primary_impression, "Analysis incomplete");
    assert_eq!(record.lkw_time, "Not documented");
    assert_eq!(record.tpa_assessment.eligible, Eligibility::Uncertain);
    assert_eq!(
        record.tpa_assessment.contraindications_missing_info,
        vec!["Full assessment required".to_string()]
    );
    assert_eq!(record.tpa_assessment.time_from_lkw, "unknown");
    assert_eq!(record.recommended_action, RecommendedAction::ConsiderStrokeAlert);
    assert!(record.flags.is_empty());
    assert!(record.error.is_none());
}

#[test]
fn probability_is_clamped_and_classification_recomputed() {
    let record = normalize(&partial(json!({
        "stroke_probability": 150,
        "classification": "LOW",
    })));

    assert_eq!(record.stroke_probability, 100);
    assert_eq!(record.classification, Classification::High);
}

#[test]
fn bounds_hold_for_out_of_range_values() {
    let cases = [
        json!({"stroke_probability": -20, "urgency_score": 0}),
        json!({"stroke_probability": 1e9, "urgency_score": 99}),
        json!({"stroke_probability": "73", "urgency_score": "4.8"}),
        json!({"stroke_probability": "high", "urgency_score": null}),
        json!({"stroke_probability": true, "urgency_score": [5]}),
    ];

    for case in cases {
        let record = normalize_value(&case);
        assert!(record.stroke_probability <= 100, "{case}");
        assert!((1..=5).contains(&record.urgency_score), "{case}");
    }
}

#[test]
fn loose_numbers_are_coerced() {
    let record = normalize(&partial(json!({
        "stroke_probability": "73",
        "urgency_score": 4.8,
    })));
    assert_eq!(record.stroke_probability, 73);
    assert_eq!(record.urgency_score, 4);
    assert_eq!(record.classification, Classification::Medium);

    let record = normalize(&partial(json!({"stroke_probability": -20, "urgency_score": 0})));
    assert_eq!(record.stroke_probability, 0);
    assert_eq!(record.urgency_score, 1);
}

#[test]
fn classification_depends_only_on_probability() {
    let with_bogus = normalize(&partial(json!({
        "stroke_probability": 64,
        "classification": "CERTAIN",
    })));
    let without = normalize(&partial(json!({"stroke_probability": 64})));
    let with_contrary = normalize(&partial(json!({
        "stroke_probability": 64,
        "classification": "HIGH",
    })));

    assert_eq!(with_bogus.classification, Classification::Medium);
    assert_eq!(with_bogus.classification, without.classification);
    assert_eq!(with_contrary.classification, without.classification);
}

#[test]
fn non_object_input_is_treated_as_empty() {
    for garbage in [json!(null), json!("oops"), json!([1, 2]), json!(42)] {
        let record = normalize_value(&garbage);
        assert_eq!(record, normalize(&PartialRecord::new()));
    }
}

#[test]
fn model_record_fields_are_kept() {
    let record = normalize(&partial(json!({
        "stroke_probability": 88,
        "primary_impression": "Left MCA syndrome",
        "key_phrases": [
            {"phrase": "right hemiparesis", "significance": "motor deficit"},
            "expressive aphasia",
            42
        ],
        "stroke_indicators": ["hemiparesis", 3, {"nested": true}],
        "mimic_indicators": "none reported",
        "tpa_assessment": {
            "eligible": true,
            "contraindications_found": [],
            "contraindications_missing_info": ["Glucose"],
            "time_from_lkw": "1.5 hours"
        },
        "lkw_time": "13:30",
        "urgency_score": 5,
        "urgency_rationale": "Within window",
        "flags": ["Confirm LKW with family"],
        "differential_diagnosis": [
            {"diagnosis": "Ischemic Stroke", "likelihood": "HIGH"},
            {"condition": "Todd's paralysis", "probability": "low"},
            {"diagnosis": "Complex migraine", "likelihood": "unclear"},
            {"likelihood": "LOW"}
        ],
        "recommended_action": "ACTIVATE_STROKE_ALERT"
    })));

    assert_eq!(record.primary_impression, "Left MCA syndrome");
    assert_eq!(record.key_phrases.len(), 2);
    assert_eq!(record.key_phrases[0].significance, "motor deficit");
    assert_eq!(record.key_phrases[1].phrase, "expressive aphasia");
    assert_eq!(record.key_phrases[1].significance, "");
    assert_eq!(record.stroke_indicators, vec!["hemiparesis".to_string(), "3".to_string()]);
    assert_eq!(record.mimic_indicators, vec!["none reported".to_string()]);
    assert_eq!(record.tpa_assessment.eligible, Eligibility::Eligible);
    assert_eq!(record.tpa_assessment.contraindications_missing_info, vec!["Glucose".to_string()]);
    assert_eq!(record.tpa_assessment.time_from_lkw, "1.5 hours");
    assert_eq!(record.lkw_time, "13:30");
    assert_eq!(record.flags, vec!["Confirm LKW with family".to_string()]);

    let differential = &record.differential_diagnosis;
    assert_eq!(differential.len(), 3);
    assert_eq!(differential[1].diagnosis, "Todd's paralysis");
    assert_eq!(differential[1].likelihood, Classification::Low);
    assert_eq!(differential[2].likelihood, Classification::Medium);
    assert_eq!(record.recommended_action, RecommendedAction::ActivateStrokeAlert);
}

#[test]
fn alternative_vocabulary_is_tolerated() {
    let record = normalize(&partial(json!({
        "stroke_probability": 75,
        "tpa_assessment": {
            "eligible": "unknown",
            "contraindications": ["INR >1.7"],
            "time_considerations": "Verify LKW"
        },
        "recommended_action": "URGENT_NEURO_CONSULT"
    })));

    assert_eq!(record.tpa_assessment.eligible, Eligibility::Uncertain);
    assert_eq!(record.tpa_assessment.contraindications_found, vec!["INR >1.7".to_string()]);
    assert_eq!(
        record.tpa_assessment.contraindications_missing_info,
        vec!["Full assessment required".to_string()]
    );
    assert_eq!(record.recommended_action, RecommendedAction::UrgentNeuroConsult);
}

#[test]
fn unknown_action_code_passes_through() {
    let record = normalize(&partial(json!({"recommended_action": "PAGE_NEUROLOGY"})));
    assert_eq!(
        record.recommended_action,
        RecommendedAction::Other("PAGE_NEUROLOGY".to_string())
    );
}

#[test]
fn upstream_error_is_preserved() {
    let record = normalize(&partial(json!({"error": "partial output"})));
    assert_eq!(record.error.as_deref(), Some("partial output"));
}

#[test]
fn heuristic_output_survives_renormalization() {
    let notes = [
        "",
        "Sudden onset facial droop and arm weakness, no history of seizure.",
        "Patient on warfarin, INR pending, facial droop noted.",
        "Patient with history of migraine with aura, reports similar episodes before.",
    ];
    for note in notes {
        let record = analyze(note);
        assert_eq!(renormalize(record.clone()), record, "{note}");
    }
}

#[test]
fn error_response_is_complete_and_flagged() {
    let record = error_response("timeout");

    assert_eq!(record.error.as_deref(), Some("timeout"));
    assert!(record.flags.iter().any(|f| f.contains("timeout")));
    assert_eq!(record.recommended_action, RecommendedAction::ConsiderStrokeAlert);
    assert_eq!(record.primary_impression, "Analysis error - manual review required");
    assert_eq!(record.stroke_probability, 50);
    assert_eq!(record.classification, Classification::Medium);
    assert!((1..=5).contains(&record.urgency_score));
    assert_eq!(record.tpa_assessment.eligible, Eligibility::Uncertain);
    assert_eq!(
        record.tpa_assessment.contraindications_missing_info,
        vec!["Analysis failed".to_string()]
    );
}

#[test]
fn error_response_survives_normalization() {
    let record = error_response("model unavailable");
    assert_eq!(renormalize(record.clone()), record);
}
