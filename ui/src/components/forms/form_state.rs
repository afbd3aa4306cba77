/// Field values and submission status shared by the auth forms
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthFormState {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub display_name: String,
    pub is_submitting: bool,
    pub error: Option<String>,
    /// Success message for forms that stay on screen
    pub notice: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthFormAction {
    SetEmail(String),
    SetPassword(String),
    SetConfirmPassword(String),
    SetDisplayName(String),
    Submit,
    Failed(String),
    Succeeded(Option<String>),
}

impl AuthFormState {
    pub fn reduce_in_place(&mut self, action: AuthFormAction) {
        match action {
            AuthFormAction::SetEmail(email) => {
                self.email = email;
                self.error = None;
            }
            AuthFormAction::SetPassword(password) => {
                self.password = password;
                self.error = None;
            }
            AuthFormAction::SetConfirmPassword(confirm) => {
                self.confirm_password = confirm;
                self.error = None;
            }
            AuthFormAction::SetDisplayName(name) => self.display_name = name,
            AuthFormAction::Submit => {
                self.is_submitting = true;
                self.error = None;
                self.notice = None;
            }
            AuthFormAction::Failed(message) => {
                self.is_submitting = false;
                self.error = Some(message);
            }
            AuthFormAction::Succeeded(notice) => {
                self.is_submitting = false;
                self.password.clear();
                self.confirm_password.clear();
                self.notice = notice;
            }
        }
    }

    /// Display name to register, if one was typed
    pub fn display_name(&self) -> Option<&str> {
        let name = self.display_name.trim();
        (!name.is_empty()).then_some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_clears_error() {
        let mut state = AuthFormState::default();
        state.reduce_in_place(AuthFormAction::Submit);
        state.reduce_in_place(AuthFormAction::Failed("Invalid email or password".into()));
        assert!(!state.is_submitting);
        assert!(state.error.is_some());

        state.reduce_in_place(AuthFormAction::SetPassword("another".into()));
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_success_clears_passwords() {
        let mut state = AuthFormState::default();
        state.reduce_in_place(AuthFormAction::SetEmail("a@b.com".into()));
        state.reduce_in_place(AuthFormAction::SetPassword("secret1".into()));
        state.reduce_in_place(AuthFormAction::SetConfirmPassword("secret1".into()));
        state.reduce_in_place(AuthFormAction::Submit);
        state.reduce_in_place(AuthFormAction::Succeeded(Some("sent".into())));

        assert_eq!(state.email, "a@b.com");
        assert!(state.password.is_empty());
        assert!(state.confirm_password.is_empty());
        assert_eq!(state.notice.as_deref(), Some("sent"));
    }

    #[test]
    fn test_blank_display_name_is_none() {
        let mut state = AuthFormState::default();
        assert_eq!(state.display_name(), None);
        state.reduce_in_place(AuthFormAction::SetDisplayName("   ".into()));
        assert_eq!(state.display_name(), None);
        state.reduce_in_place(AuthFormAction::SetDisplayName(" Dr. Lee ".into()));
        assert_eq!(state.display_name(), Some("Dr. Lee"));
    }
}
