//! strokesense-core
//!
//! Pure domain types for stroke triage: the assessment record exchanged with
//! the dashboard, its enums and thresholds, and the loosely-typed partial
//! record coming back from a language model. No I/O.

pub mod error;
pub mod models;
pub mod partial;
pub mod thresholds;
