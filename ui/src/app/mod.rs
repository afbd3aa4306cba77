//! Top-level pages composed from the shared components

pub mod intake_dashboard;
pub mod services;

pub use intake_dashboard::*;
pub use services::*;
