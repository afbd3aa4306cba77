//! Shared UI components and client services for the patient-intake front-end.

pub mod app;
pub use app::{AppServices, IntakeDashboard};

pub mod components;
pub mod records;
pub mod services;
pub mod session;
pub mod utils;

pub use session::{AuthHandle, Session};
