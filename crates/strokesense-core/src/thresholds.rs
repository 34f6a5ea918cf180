//! Fixed clinical thresholds shared by every analysis path.

/// Probability at or above which a note is classified HIGH.
pub const HIGH_PROBABILITY_THRESHOLD: u8 = 80;

/// Probability at or above which a note is classified MEDIUM.
pub const MEDIUM_PROBABILITY_THRESHOLD: u8 = 50;

pub const MIN_PROBABILITY: u8 = 0;
pub const MAX_PROBABILITY: u8 = 100;

pub const MIN_URGENCY: u8 = 1;
pub const MAX_URGENCY: u8 = 5;

/// tPA treatment window from last known well, in hours.
pub const TPA_TIME_WINDOW_HOURS: f64 = 4.5;

/// Sentinel used when no last-known-well time could be found.
pub const LKW_NOT_DOCUMENTED: &str = "Not documented";

/// Sentinel for an unknown time from last known well.
pub const TIME_FROM_LKW_UNKNOWN: &str = "unknown";

/// Descriptor for each urgency score, highest first.
pub const URGENCY_CRITERIA: [(u8, &str); 5] = [
    (
        5,
        "Immediate activation - classic stroke presentation within treatment window",
    ),
    (4, "High urgency - strong stroke indicators, verify eligibility"),
    (3, "Moderate urgency - mixed presentation, needs further evaluation"),
    (2, "Low urgency - mimic features present, stroke less likely"),
    (1, "Minimal urgency - classic mimic presentation"),
];

/// Look up the descriptor for an urgency score.
pub fn urgency_descriptor(score: u8) -> Option<&'static str> {
    URGENCY_CRITERIA
        .iter()
        .find(|(s, _)| *s == score)
        .map(|(_, text)| *text)
}

/// Reference list of tPA contraindications rendered into model prompts.
pub const TPA_CONTRAINDICATIONS: &[&str] = &[
    "active internal bleeding",
    "recent intracranial surgery",
    "recent head trauma",
    "intracranial hemorrhage",
    "subarachnoid hemorrhage",
    "uncontrolled hypertension",
    "blood glucose <50",
    "platelet count <100000",
    "INR >1.7",
    "current anticoagulation",
    "warfarin use",
    "heparin use",
    "recent major surgery",
    "arterial puncture at non-compressible site",
    "seizure at onset with postictal state",
    "previous stroke within 3 months",
    "previous intracranial hemorrhage",
    "brain tumor",
    "arteriovenous malformation",
    "aneurysm",
    "bleeding diathesis",
];
