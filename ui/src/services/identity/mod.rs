//! Identity provider client
//!
//! The `IdentityProvider` trait is the contract the screens authenticate
//! through. `RestIdentityProvider` speaks the `accounts:<op>` REST API and
//! keeps tokens in a `CredentialStore`.
//!
//! Traits are `?Send`: every future here runs on the browser's single thread.

pub mod credential_store;
pub mod errors;
pub mod rest_provider;
pub mod types;

use async_trait::async_trait;

use crate::session::AuthUser;

pub use credential_store::*;
pub use errors::*;
pub use rest_provider::RestIdentityProvider;
pub use types::*;

#[async_trait(?Send)]
pub trait IdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> AuthResult<AuthUser>;

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> AuthResult<AuthUser>;

    async fn send_password_reset(&self, email: &str) -> AuthResult<()>;

    /// Resume a persisted session; stale or missing credentials yield `None`
    async fn restore(&self) -> AuthResult<Option<AuthUser>>;

    async fn sign_out(&self) -> AuthResult<()>;

    /// Bearer token for backend calls, if signed in
    fn id_token(&self) -> Option<String>;
}
