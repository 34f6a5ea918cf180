//! strokesense-triage
//!
//! Deterministic stroke triage. Pure functions, no I/O:
//!
//! - [`heuristic`] scores an ED note against the keyword [`lexicon`] when no
//!   language model is available.
//! - [`normalize`] turns any loosely-typed record (a model's JSON or a
//!   heuristic result) into a complete, bounded [`AssessmentRecord`], and
//!   builds the degraded record used when analysis fails outright.
//!
//! [`AssessmentRecord`]: strokesense_core::models::assessment::AssessmentRecord

pub mod heuristic;
pub mod lexicon;
pub mod lkw;
pub mod normalize;

pub use heuristic::{HeuristicAnalyzer, analyze};
pub use normalize::{error_response, normalize, normalize_value, renormalize};
