//! Sign-out flow against in-memory collaborators

use std::cell::{Cell, RefCell};
use std::error::Error;

use async_trait::async_trait;

use super::sign_out::*;
use super::types::{test_user, AuthUser};
use crate::services::identity::{AuthError, AuthResult, IdentityProvider};

struct FakeProvider {
    fail_sign_out: bool,
    sign_out_calls: Cell<u32>,
}

impl FakeProvider {
    fn new(fail_sign_out: bool) -> Self {
        Self {
            fail_sign_out,
            sign_out_calls: Cell::new(0),
        }
    }
}

#[async_trait(?Send)]
impl IdentityProvider for FakeProvider {
    async fn sign_in(&self, _email: &str, _password: &str) -> AuthResult<AuthUser> {
        Ok(test_user(None))
    }

    async fn sign_up(
        &self,
        _email: &str,
        _password: &str,
        _display_name: Option<&str>,
    ) -> AuthResult<AuthUser> {
        Ok(test_user(None))
    }

    async fn send_password_reset(&self, _email: &str) -> AuthResult<()> {
        Ok(())
    }

    async fn restore(&self) -> AuthResult<Option<AuthUser>> {
        Ok(None)
    }

    async fn sign_out(&self) -> AuthResult<()> {
        self.sign_out_calls.set(self.sign_out_calls.get() + 1);
        if self.fail_sign_out {
            Err(AuthError::Network {
                message: "offline".to_string(),
            })
        } else {
            Ok(())
        }
    }

    fn id_token(&self) -> Option<String> {
        None
    }
}

#[derive(Default)]
struct RecordingNavigator {
    paths: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.borrow_mut().push(path.to_string());
    }
}

#[derive(Default)]
struct RecordingDiagnostics {
    entries: RefCell<Vec<(String, String)>>,
}

impl Diagnostics for RecordingDiagnostics {
    fn report(&self, error: &dyn Error, message: &str) {
        self.entries
            .borrow_mut()
            .push((message.to_string(), error.to_string()));
    }
}

#[tokio::test]
async fn test_successful_sign_out_navigates_home_once() {
    let provider = FakeProvider::new(false);
    let navigator = RecordingNavigator::default();
    let diagnostics = RecordingDiagnostics::default();

    handle_sign_out(&provider, &navigator, &diagnostics).await;

    assert_eq!(provider.sign_out_calls.get(), 1);
    assert_eq!(*navigator.paths.borrow(), vec!["/home".to_string()]);
    assert!(diagnostics.entries.borrow().is_empty());
}

#[tokio::test]
async fn test_failed_sign_out_logs_once_and_stays() {
    let provider = FakeProvider::new(true);
    let navigator = RecordingNavigator::default();
    let diagnostics = RecordingDiagnostics::default();

    handle_sign_out(&provider, &navigator, &diagnostics).await;

    assert!(navigator.paths.borrow().is_empty());
    let entries = diagnostics.entries.borrow();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, SIGN_OUT_FAILED_MESSAGE);
    assert!(entries[0].1.contains("offline"));
}

#[tokio::test]
async fn test_sign_out_result_is_explicit() {
    let navigator = RecordingNavigator::default();

    let ok = sign_out_and_redirect(&FakeProvider::new(false), &navigator).await;
    assert!(ok.is_ok());

    let err = sign_out_and_redirect(&FakeProvider::new(true), &navigator).await;
    assert!(matches!(err, Err(AuthError::Network { .. })));
    assert_eq!(navigator.paths.borrow().len(), 1);
}
