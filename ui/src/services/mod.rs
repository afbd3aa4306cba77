//! Infrastructure Services
//!
//! - **identity**: identity provider client and credential persistence
//! - **records_api**: assessment records backend client
//! - **scoring**: norm-table scoring of raw questionnaire scores
//! - **config**: build-time configuration
//! - **errors**: the error type screens display
//!
//! The services are WASM-first: async traits are `?Send` and state lives in
//! `Rc`/`RefCell` rather than behind locks.

pub mod config;
pub mod errors;
pub mod identity;
pub mod records_api;
pub mod scoring;
