//! Session state and the sign-out flow
//!
//! - **types**: the shared `Session`, its reducer and the panel's `SessionView`
//! - **auth_handle**: the provider + session pair passed to components
//! - **sign_out**: sign-out with navigation and the diagnostic channel

pub mod auth_handle;
pub mod sign_out;
pub mod types;

pub use auth_handle::AuthHandle;
pub use sign_out::*;
pub use types::*;

#[cfg(test)]
mod sign_out_test;
