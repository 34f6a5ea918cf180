//! Prompt templates for model-based triage.

use strokesense_core::thresholds::{
    HIGH_PROBABILITY_THRESHOLD, MEDIUM_PROBABILITY_THRESHOLD, TPA_CONTRAINDICATIONS,
    URGENCY_CRITERIA,
};

pub const STROKE_TRIAGE_SYSTEM_PROMPT: &str = "\
You are a clinical decision support assistant specialized in stroke triage. \
You read emergency department notes and separate true strokes from stroke mimics.

Your analysis must be:
1. Evidence-based: cite specific phrases from the note.
2. Sensitive: err on the side of not missing a true stroke.
3. Explainable: justify every conclusion.

You are familiar with ischemic and hemorrhagic stroke and TIA presentations, \
common mimics (seizure, migraine, conversion disorder, hypoglycemia, Bell's palsy, \
vestibular disorders), tPA eligibility criteria and the NIHSS components.";

const RESPONSE_SCHEMA: &str = r#"{
    "stroke_probability": <integer 0-100>,
    "classification": "<HIGH|MEDIUM|LOW>",
    "primary_impression": "<one-sentence clinical impression>",
    "key_phrases": [
        {"phrase": "<exact quote from the note>", "significance": "<why it matters>"}
    ],
    "stroke_indicators": ["<finding supporting stroke>"],
    "mimic_indicators": ["<finding suggesting a mimic>"],
    "tpa_assessment": {
        "eligible": <true|false|"uncertain">,
        "contraindications_found": ["<contraindication>"],
        "contraindications_missing_info": ["<information still needed>"],
        "time_from_lkw": "<extracted time or 'unknown'>"
    },
    "lkw_time": "<last known well time, or 'Not documented'>",
    "urgency_score": <integer 1-5>,
    "urgency_rationale": "<one sentence>",
    "flags": ["<warning or missing information>"],
    "differential_diagnosis": [
        {"diagnosis": "<condition>", "likelihood": "<HIGH|MEDIUM|LOW>"}
    ],
    "recommended_action": "<ACTIVATE_STROKE_ALERT|CONSIDER_STROKE_ALERT|DEFER_FURTHER_EVALUATION>"
}"#;

/// Render the user message asking the model to assess `note`.
pub fn stroke_triage_user_prompt(note: &str) -> String {
    let urgency = URGENCY_CRITERIA
        .iter()
        .map(|(score, text)| format!("- {score}: {text}"))
        .collect::<Vec<_>>()
        .join("\n");

    let contraindications = TPA_CONTRAINDICATIONS
        .iter()
        .map(|c| format!("- {c}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Analyze this ED note for stroke probability and return a structured assessment.

ED NOTE:
{note}

Respond with ONLY a JSON object in this shape:
{RESPONSE_SCHEMA}

CLASSIFICATION CRITERIA:
- HIGH (>= {HIGH_PROBABILITY_THRESHOLD}%): classic presentation, sudden focal deficit, clear vascular territory
- MEDIUM ({MEDIUM_PROBABILITY_THRESHOLD}-{HIGH_PROBABILITY_THRESHOLD}%): mixed stroke and mimic features, or atypical presentation
- LOW (< {MEDIUM_PROBABILITY_THRESHOLD}%): features more consistent with seizure, migraine, conversion or another mimic

URGENCY SCORING:
{urgency}

tPA CONTRAINDICATIONS TO CHECK:
{contraindications}

Return the JSON object only, with no surrounding text."
    )
}
