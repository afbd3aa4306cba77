// Core session types - no dioxus imports needed here
use serde::{Deserialize, Serialize};

/// Shown in place of a missing display name
pub const DISPLAY_NAME_FALLBACK: &str = "N/A";
pub const LOADING_TEXT: &str = "Loading user data...";
pub const SIGNED_OUT_TEXT: &str = "Not signed in";

/// Identity of the signed-in user as reported by the identity provider
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
}

/// Authentication state shared by every screen.
///
/// Owned by the auth collaborator; components only read it.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: Option<AuthUser>,
    pub loading: bool,
}

impl Default for Session {
    /// A fresh page load is loading until the stored session is restored
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl Session {
    pub fn signed_in(user: AuthUser) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.user.is_some()
    }

    /// True once loading finished without a user
    pub fn should_redirect_unauth(&self) -> bool {
        !self.loading && self.user.is_none()
    }

    pub fn reduce_in_place(&mut self, action: SessionAction) {
        match action {
            SessionAction::SetLoading(loading) => {
                self.loading = loading;
            }
            SessionAction::SetUser(user) => {
                self.user = user;
                self.loading = false;
            }
            SessionAction::Clear => {
                self.user = None;
                self.loading = false;
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    SetLoading(bool),
    /// Resolves loading
    SetUser(Option<AuthUser>),
    Clear,
}

/// What the session panel shows for a given session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionView {
    Loading,
    SignedIn { email: String, display_name: String },
    SignedOut,
}

impl SessionView {
    pub fn from_session(session: &Session) -> Self {
        if session.loading {
            return SessionView::Loading;
        }

        match &session.user {
            Some(user) => SessionView::SignedIn {
                email: user.email.clone(),
                display_name: user
                    .display_name
                    .as_deref()
                    .filter(|name| !name.trim().is_empty())
                    .unwrap_or(DISPLAY_NAME_FALLBACK)
                    .to_string(),
            },
            None => SessionView::SignedOut,
        }
    }

    /// Text lines rendered in the panel body, in order
    pub fn body_lines(&self) -> Vec<String> {
        match self {
            SessionView::Loading => vec![LOADING_TEXT.to_string()],
            SessionView::SignedIn {
                email,
                display_name,
            } => vec![
                format!("Email: {}", email),
                format!("Display name: {}", display_name),
            ],
            SessionView::SignedOut => vec![SIGNED_OUT_TEXT.to_string()],
        }
    }

    /// The sign-out control is rendered whenever the panel body is
    pub fn shows_sign_out(&self) -> bool {
        !matches!(self, SessionView::Loading)
    }
}

#[cfg(test)]
pub(crate) fn test_user(display_name: Option<&str>) -> AuthUser {
    AuthUser {
        uid: "uid-1".to_string(),
        email: "a@b.com".to_string(),
        display_name: display_name.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_shows_only_placeholder() {
        for user in [None, Some(test_user(Some("Ada"))), Some(test_user(None))] {
            let session = Session {
                user,
                loading: true,
            };
            let view = SessionView::from_session(&session);
            assert_eq!(view, SessionView::Loading);
            assert_eq!(view.body_lines(), vec![LOADING_TEXT.to_string()]);
            assert!(!view.shows_sign_out());
        }
    }

    #[test]
    fn test_missing_display_name_falls_back() {
        let session = Session::signed_in(test_user(None));
        let view = SessionView::from_session(&session);

        let lines = view.body_lines();
        assert!(lines.iter().any(|l| l.contains("a@b.com")));
        assert!(lines.iter().any(|l| l.contains(DISPLAY_NAME_FALLBACK)));
        assert!(view.shows_sign_out());
    }

    #[test]
    fn test_display_name_shown() {
        let session = Session::signed_in(test_user(Some("Ada")));
        let lines = SessionView::from_session(&session).body_lines();

        assert!(lines.iter().any(|l| l.contains("Ada")));
        assert!(lines.iter().all(|l| !l.contains("N/A")));
    }

    #[test]
    fn test_blank_display_name_falls_back() {
        let session = Session::signed_in(test_user(Some("  ")));
        match SessionView::from_session(&session) {
            SessionView::SignedIn { display_name, .. } => assert_eq!(display_name, "N/A"),
            other => panic!("expected signed-in view, got {:?}", other),
        }
    }

    #[test]
    fn test_no_user_and_not_loading_is_signed_out() {
        let view = SessionView::from_session(&Session::signed_out());
        assert_eq!(view, SessionView::SignedOut);
        assert_ne!(view.body_lines(), vec![LOADING_TEXT.to_string()]);
        assert!(view.shows_sign_out());
    }

    #[test]
    fn test_reducer() {
        let mut session = Session::default();
        assert!(session.loading);
        assert!(!session.should_redirect_unauth());

        session.reduce_in_place(SessionAction::SetUser(Some(test_user(None))));
        assert!(session.is_authenticated());

        session.reduce_in_place(SessionAction::SetLoading(true));
        assert!(!session.is_authenticated());

        session.reduce_in_place(SessionAction::Clear);
        assert_eq!(session, Session::signed_out());
        assert!(session.should_redirect_unauth());
    }
}
