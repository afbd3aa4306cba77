use std::rc::Rc;

use async_trait::async_trait;
use dioxus::prelude::*;

use super::types::{AuthUser, Session, SessionAction};
use crate::services::identity::{AuthResult, IdentityProvider};

/// The auth collaborator handed to components.
///
/// Pairs the identity provider with the shared session signal and resolves
/// the session after every provider call. Components read the session
/// through it and never write to it themselves.
#[derive(Clone)]
pub struct AuthHandle {
    provider: Rc<dyn IdentityProvider>,
    session: Signal<Session>,
}

impl PartialEq for AuthHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.provider, &other.provider) && self.session == other.session
    }
}

impl AuthHandle {
    pub fn new(provider: Rc<dyn IdentityProvider>, session: Signal<Session>) -> Self {
        Self { provider, session }
    }

    /// Current session snapshot (subscribes the calling component)
    pub fn session(&self) -> Session {
        self.session.read().clone()
    }

    pub fn session_signal(&self) -> Signal<Session> {
        self.session
    }

    fn dispatch(&self, action: SessionAction) {
        let mut session = self.session;
        session.with_mut(|s| s.reduce_in_place(action));
    }
}

#[async_trait(?Send)]
impl IdentityProvider for AuthHandle {
    async fn sign_in(&self, email: &str, password: &str) -> AuthResult<AuthUser> {
        let user = self.provider.sign_in(email, password).await?;
        self.dispatch(SessionAction::SetUser(Some(user.clone())));
        Ok(user)
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> AuthResult<AuthUser> {
        let user = self.provider.sign_up(email, password, display_name).await?;
        self.dispatch(SessionAction::SetUser(Some(user.clone())));
        Ok(user)
    }

    async fn send_password_reset(&self, email: &str) -> AuthResult<()> {
        self.provider.send_password_reset(email).await
    }

    async fn restore(&self) -> AuthResult<Option<AuthUser>> {
        self.dispatch(SessionAction::SetLoading(true));
        match self.provider.restore().await {
            Ok(user) => {
                self.dispatch(SessionAction::SetUser(user.clone()));
                Ok(user)
            }
            Err(e) => {
                self.dispatch(SessionAction::Clear);
                Err(e)
            }
        }
    }

    async fn sign_out(&self) -> AuthResult<()> {
        self.provider.sign_out().await?;
        self.dispatch(SessionAction::Clear);
        Ok(())
    }

    fn id_token(&self) -> Option<String> {
        self.provider.id_token()
    }
}
