//! User Interface Components
//!
//! Reusable Dioxus components for the intake front-end:
//!
//! - **display**: loading, status and error indicators
//! - **forms**: sign-in, sign-up and password reset
//! - **inputs**: validated input fields
//! - **records**: the assessments table and score panel
//! - **session**: the user session panel and profile card

pub mod display;
pub mod forms;
pub mod inputs;
pub mod records;
pub mod session;
