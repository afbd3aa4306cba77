//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: browser console logging macros
//! - **validation**: auth form validation

pub mod console_macros;
pub mod validation;

pub use validation::*;
