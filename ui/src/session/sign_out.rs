//! Sign-out action of the session panel.
//!
//! `sign_out_and_redirect` reports its outcome as a `Result`; the panel's
//! click handler goes through `handle_sign_out`, which logs a failure to the
//! diagnostic channel and leaves the user where they are.

use std::error::Error;

use dioxus::prelude::EventHandler;
use tracing::info;

use crate::console_error;
use crate::services::identity::{AuthResult, IdentityProvider};

/// Where the user lands after signing out
pub const HOME_PATH: &str = "/home";

pub const SIGN_OUT_FAILED_MESSAGE: &str = "Error signing out";

/// Router collaborator
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Route changes delivered to a component event handler
impl Navigator for EventHandler<String> {
    fn navigate(&self, path: &str) {
        self.call(path.to_string());
    }
}

/// Diagnostic channel: fire-and-forget error reports
pub trait Diagnostics {
    fn report(&self, error: &dyn Error, message: &str);
}

/// Reports to the browser console
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConsoleDiagnostics;

impl Diagnostics for ConsoleDiagnostics {
    fn report(&self, error: &dyn Error, message: &str) {
        console_error!("{}: {}", message, error);
    }
}

/// Sign out, then navigate home. Nothing navigates on failure.
pub async fn sign_out_and_redirect(
    provider: &dyn IdentityProvider,
    navigator: &dyn Navigator,
) -> AuthResult<()> {
    provider.sign_out().await?;
    info!("Sign-out complete, navigating to {}", HOME_PATH);
    navigator.navigate(HOME_PATH);
    Ok(())
}

/// Best-effort sign-out for UI handlers: failures are reported and swallowed
pub async fn handle_sign_out(
    provider: &dyn IdentityProvider,
    navigator: &dyn Navigator,
    diagnostics: &dyn Diagnostics,
) {
    if let Err(e) = sign_out_and_redirect(provider, navigator).await {
        diagnostics.report(&e, SIGN_OUT_FAILED_MESSAGE);
    }
}
