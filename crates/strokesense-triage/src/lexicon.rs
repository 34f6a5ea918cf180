use std::sync::LazyLock;

use regex::Regex;

/// Phrases suggesting a true stroke, in match-reporting order.
pub const STROKE_KEYWORDS: &[&str] = &[
    "sudden onset",
    "facial droop",
    "arm weakness",
    "leg weakness",
    "speech difficulty",
    "slurred speech",
    "aphasia",
    "dysarthria",
    "hemiparesis",
    "hemiplegia",
    "numbness",
    "visual field",
    "neglect",
    "ataxia",
    "vertigo",
    "diplopia",
    "weakness",
];

/// Phrases suggesting a stroke mimic.
pub const MIMIC_KEYWORDS: &[&str] = &[
    "seizure",
    "postictal",
    "migraine",
    "aura",
    "headache history",
    "conversion",
    "anxiety",
    "hyperventilation",
    "hypoglycemia",
    "low blood sugar",
    "bell's palsy",
    "peripheral",
    "psychiatric",
    "drug use",
    "intoxication",
    "alcohol",
];

/// Terms that put tPA eligibility in doubt.
pub const CONTRAINDICATION_KEYWORDS: &[&str] = &[
    "warfarin",
    "coumadin",
    "anticoagulation",
    "bleeding",
    "hemorrhage",
    "recent surgery",
    "head trauma",
    "inr",
];

/// Phrases describing an abrupt onset, which earn a probability bonus.
pub const ONSET_MARKERS: &[&str] = &["sudden onset", "acute onset"];

/// Last-known-well patterns, tried in order against lowercased text.
/// Capture group 1 is the extracted time expression.
pub const LKW_PATTERNS: &[&str] = &[
    r"last (?:known )?(?:normal|well)[:\s]+([^.]+)",
    r"lkw[:\s]+([^.]+)",
    r"symptom onset[:\s]+([^.]+)",
    r"(\d+)\s*(?:hours?|hrs?)\s*ago",
];

/// Keyword tables and time-extraction patterns used by the heuristic
/// analyzer. Built once and only ever read.
#[derive(Debug)]
pub struct KeywordLexicon {
    pub stroke: &'static [&'static str],
    pub mimic: &'static [&'static str],
    pub contraindications: &'static [&'static str],
    pub onset_markers: &'static [&'static str],
    pub lkw_patterns: Vec<Regex>,
}

static STANDARD: LazyLock<KeywordLexicon> = LazyLock::new(|| KeywordLexicon {
    stroke: STROKE_KEYWORDS,
    mimic: MIMIC_KEYWORDS,
    contraindications: CONTRAINDICATION_KEYWORDS,
    onset_markers: ONSET_MARKERS,
    lkw_patterns: LKW_PATTERNS
        .iter()
        .map(|p| Regex::new(p).expect("Invalid LKW regex pattern"))
        .collect(),
});

impl KeywordLexicon {
    /// The process-wide lexicon.
    pub fn standard() -> &'static KeywordLexicon {
        &STANDARD
    }

    /// Stroke phrases present in `note_lower`, in declaration order.
    pub fn stroke_matches<'a>(&'a self, note_lower: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        present_in(self.stroke, note_lower)
    }

    /// Mimic phrases present in `note_lower`, in declaration order.
    pub fn mimic_matches<'a>(&'a self, note_lower: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        present_in(self.mimic, note_lower)
    }

    /// Contraindication terms present in `note_lower`, in declaration order.
    pub fn contraindication_matches<'a>(
        &'a self,
        note_lower: &'a str,
    ) -> impl Iterator<Item = &'static str> + 'a {
        present_in(self.contraindications, note_lower)
    }

    pub fn has_abrupt_onset(&self, note_lower: &str) -> bool {
        self.onset_markers.iter().any(|m| note_lower.contains(*m))
    }
}

/// Substring containment, not tokenized: "weakness" matches inside
/// "arm weakness".
fn present_in<'a>(
    terms: &'static [&'static str],
    note_lower: &'a str,
) -> impl Iterator<Item = &'static str> + 'a {
    terms.iter().copied().filter(move |t| note_lower.contains(*t))
}
