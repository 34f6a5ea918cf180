//! strokesense-bedrock
//!
//! Language-model triage via Bedrock, and the policy that decides between
//! the model and the heuristic analyzer.

pub mod assess;
pub mod client;
pub mod error;
pub mod extract;
pub mod model;
pub mod prompts;
