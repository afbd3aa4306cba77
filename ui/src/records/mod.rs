//! Assessment Records
//!
//! Domain model for the intake dashboard:
//!
//! - **catalog**: the fixed column and status tables consumed by the records table
//! - **types**: the submitted assessment record as the backend emits it
//! - **table**: search, status filtering, sorting and pagination over records

pub mod catalog;
pub mod table;
pub mod types;

pub use catalog::*;
pub use table::*;
pub use types::*;

#[cfg(test)]
mod table_test;
