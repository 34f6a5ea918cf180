//! Keyword-scoring fallback analyzer.
//!
//! Used when no language model is configured, or when the model path fails
//! and the caller prefers a heuristic answer to a degraded one. Total over
//! all inputs (including the empty note) and deterministic.

use tracing::debug;

use strokesense_core::models::action::RecommendedAction;
use strokesense_core::models::assessment::{
    AssessmentRecord, DifferentialEntry, KeyPhrase, TpaAssessment,
};
use strokesense_core::models::classification::Classification;
use strokesense_core::models::eligibility::Eligibility;
use strokesense_core::thresholds::{
    HIGH_PROBABILITY_THRESHOLD, LKW_NOT_DOCUMENTED, MEDIUM_PROBABILITY_THRESHOLD,
};

use crate::lexicon::KeywordLexicon;
use crate::lkw::extract_lkw;

const MAX_KEY_PHRASES: usize = 8;
const MAX_INDICATORS: usize = 5;

const BASE_PROBABILITY_FLOOR: u8 = 5;
const PROBABILITY_CEILING: u8 = 95;
const ONSET_BONUS: u8 = 20;

const STROKE_SIGNIFICANCE: &str = "stroke indicator";
const MIMIC_SIGNIFICANCE: &str = "mimic indicator";

/// Scores notes against a borrowed [`KeywordLexicon`].
#[derive(Debug, Clone, Copy)]
pub struct HeuristicAnalyzer<'a> {
    lexicon: &'a KeywordLexicon,
}

impl Default for HeuristicAnalyzer<'static> {
    fn default() -> Self {
        Self::new(KeywordLexicon::standard())
    }
}

impl<'a> HeuristicAnalyzer<'a> {
    pub fn new(lexicon: &'a KeywordLexicon) -> Self {
        Self { lexicon }
    }

    pub fn analyze(&self, note: &str) -> AssessmentRecord {
        let lower = note.to_lowercase();
        let lexicon = self.lexicon;

        let stroke_hits: Vec<&str> = lexicon.stroke_matches(&lower).collect();
        let mimic_hits: Vec<&str> = lexicon.mimic_matches(&lower).collect();
        let contraindications: Vec<String> = lexicon
            .contraindication_matches(&lower)
            .map(str::to_string)
            .collect();

        let probability = stroke_probability(
            stroke_hits.len(),
            mimic_hits.len(),
            lexicon.has_abrupt_onset(&lower),
        );
        let classification = Classification::from_probability(probability);
        let has_contraindication = !contraindications.is_empty();

        let key_phrases = stroke_hits
            .iter()
            .map(|p| (p, STROKE_SIGNIFICANCE))
            .chain(mimic_hits.iter().map(|p| (p, MIMIC_SIGNIFICANCE)))
            .take(MAX_KEY_PHRASES)
            .map(|(phrase, significance)| KeyPhrase {
                phrase: phrase.to_string(),
                significance: significance.to_string(),
            })
            .collect();

        let lkw_time = extract_lkw(&lexicon.lkw_patterns, &lower)
            .unwrap_or_else(|| LKW_NOT_DOCUMENTED.to_string());

        // TODO: absence of contraindication keywords is reported as eligible;
        // this should become Uncertain once clinical stakeholders sign off.
        let eligible = if has_contraindication {
            Eligibility::Uncertain
        } else {
            Eligibility::Eligible
        };
        let missing_info = if has_contraindication {
            Vec::new()
        } else {
            vec!["INR value".to_string(), "Platelet count".to_string()]
        };

        let flags = contraindications
            .iter()
            .map(|c| format!("⚠️ Possible contraindication: {c}"))
            .collect();

        debug!(
            stroke_score = stroke_hits.len(),
            mimic_score = mimic_hits.len(),
            contraindications = contraindications.len(),
            probability,
            "heuristic analysis complete"
        );

        AssessmentRecord {
            stroke_probability: probability,
            classification,
            primary_impression: primary_impression(probability),
            key_phrases,
            stroke_indicators: first_n(&stroke_hits, MAX_INDICATORS),
            mimic_indicators: first_n(&mimic_hits, MAX_INDICATORS),
            tpa_assessment: TpaAssessment {
                eligible,
                contraindications_found: contraindications,
                contraindications_missing_info: missing_info,
                time_from_lkw: lkw_time.clone(),
            },
            lkw_time,
            urgency_score: urgency_score(probability, has_contraindication),
            urgency_rationale: format!(
                "Based on {probability}% stroke probability and {} contraindications",
                if has_contraindication { "possible" } else { "no" }
            ),
            flags,
            differential_diagnosis: vec![
                DifferentialEntry {
                    diagnosis: "Ischemic Stroke".to_string(),
                    likelihood: classification,
                },
                DifferentialEntry {
                    diagnosis: "Stroke Mimic".to_string(),
                    likelihood: classification.inverse(),
                },
            ],
            recommended_action: recommended_action(probability),
            error: None,
        }
    }
}

/// Analyze a note with the standard lexicon.
pub fn analyze(note: &str) -> AssessmentRecord {
    HeuristicAnalyzer::default().analyze(note)
}

/// Keyword-ratio probability with the abrupt-onset bonus.
///
/// The `+ 1` in the denominator keeps a note with no keywords in the
/// uncertain middle rather than at either extreme. The base value is held
/// to 5..=95; after the bonus only the ceiling applies.
pub fn stroke_probability(stroke_score: usize, mimic_score: usize, abrupt_onset: bool) -> u8 {
    let total = (stroke_score + mimic_score + 1) as f64;
    let ratio = (stroke_score as f64 / total * 100.0).round() as u8;
    let base = ratio.clamp(BASE_PROBABILITY_FLOOR, PROBABILITY_CEILING);

    if abrupt_onset {
        (base + ONSET_BONUS).min(PROBABILITY_CEILING)
    } else {
        base
    }
}

/// First-match-wins urgency table.
pub fn urgency_score(probability: u8, has_contraindication: bool) -> u8 {
    match probability {
        p if p >= HIGH_PROBABILITY_THRESHOLD && !has_contraindication => 5,
        p if p >= 70 => 4,
        p if p >= MEDIUM_PROBABILITY_THRESHOLD => 3,
        p if p >= 30 => 2,
        _ => 1,
    }
}

pub fn recommended_action(probability: u8) -> RecommendedAction {
    match Classification::from_probability(probability) {
        Classification::High => RecommendedAction::ActivateStrokeAlert,
        Classification::Medium => RecommendedAction::ConsiderStrokeAlert,
        Classification::Low => RecommendedAction::DeferFurtherEvaluation,
    }
}

fn primary_impression(probability: u8) -> String {
    let presentation = match probability {
        p if p >= 70 => "Strong stroke presentation",
        p if p >= 40 => "Mixed presentation",
        _ => "Likely mimic",
    };
    format!("{presentation} based on clinical features")
}

fn first_n(hits: &[&str], n: usize) -> Vec<String> {
    hits.iter().take(n).map(|s| s.to_string()).collect()
}
