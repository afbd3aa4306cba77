//! Norm-table scoring
//!
//! Raw questionnaire scores are converted to normed scores by exact lookup of
//! the raw score in the norm tables of the patient's group (respondent,
//! setting, gender and age in whole years).
//!
//! - **norm_table**: table parsing, lookup and table selection
//! - **report**: raw scores in, score report out
//! - **source**: HTTP loading and the LRU cache in front of it

pub mod errors;
pub mod norm_table;
pub mod report;
pub mod source;

pub use errors::*;
pub use norm_table::*;
pub use report::*;
pub use source::*;
