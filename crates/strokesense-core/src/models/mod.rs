pub mod action;
pub mod assessment;
pub mod classification;
pub mod eligibility;
