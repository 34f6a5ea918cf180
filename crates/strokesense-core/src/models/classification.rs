use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::thresholds::{HIGH_PROBABILITY_THRESHOLD, MEDIUM_PROBABILITY_THRESHOLD};

/// Three-level stroke likelihood.
///
/// Used both as the overall classification of a note and as the likelihood
/// attached to each differential diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum Classification {
    High,
    Medium,
    Low,
}

/// Likelihood of a single differential diagnosis.
pub type Likelihood = Classification;

impl Classification {
    /// Derive the classification from a stroke probability.
    ///
    /// This is the only way a record's classification is ever set.
    pub fn from_probability(probability: u8) -> Self {
        if probability >= HIGH_PROBABILITY_THRESHOLD {
            Classification::High
        } else if probability >= MEDIUM_PROBABILITY_THRESHOLD {
            Classification::Medium
        } else {
            Classification::Low
        }
    }

    /// Swap HIGH and LOW; MEDIUM stays MEDIUM.
    pub fn inverse(self) -> Self {
        match self {
            Classification::High => Classification::Low,
            Classification::Medium => Classification::Medium,
            Classification::Low => Classification::High,
        }
    }

    /// Parse a level from model text in any letter case.
    pub fn parse_lenient(text: &str) -> Option<Self> {
        match text.trim().to_ascii_uppercase().as_str() {
            "HIGH" => Some(Classification::High),
            "MEDIUM" | "MODERATE" => Some(Classification::Medium),
            "LOW" => Some(Classification::Low),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Classification::High => "HIGH",
            Classification::Medium => "MEDIUM",
            Classification::Low => "LOW",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
