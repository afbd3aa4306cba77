use dioxus::prelude::*;

use super::form_state::{AuthFormAction, AuthFormState};
use crate::components::inputs::{InputType, ValidatedInput};
use crate::services::identity::IdentityProvider;
use crate::session::AuthHandle;
use crate::utils::{email_validation_class, validate_email, EmailValidation};
use crate::console_warn;

pub const RESET_SENT_NOTICE: &str = "If an account exists for that address, a reset link is on its way.";

#[derive(Props, PartialEq, Clone)]
pub struct ResetPasswordFormProps {
    pub auth: AuthHandle,
    pub navigate: EventHandler<String>,
}

#[component]
pub fn ResetPasswordForm(props: ResetPasswordFormProps) -> Element {
    let navigate = props.navigate;
    let mut state = use_signal(AuthFormState::default);
    let dispatch = EventHandler::new(move |action: AuthFormAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    let current = state();
    let email_check = validate_email(&current.email);
    let ready = email_check == EmailValidation::Valid && !current.is_submitting;
    let auth = props.auth.clone();

    rsx! {
        div {
            class: "auth-form",
            h2 { class: "form-title", "Reset password" }

            ValidatedInput {
                label: "Email".to_string(),
                value: current.email.clone(),
                placeholder: "you@clinic.org".to_string(),
                input_type: InputType::Email,
                input_class: email_validation_class(&email_check).to_string(),
                autocomplete: "email".to_string(),
                disabled: current.is_submitting,
                on_change: move |value: String| dispatch.call(AuthFormAction::SetEmail(value)),
            }

            if let Some(error) = current.error.clone() {
                div { class: "form-error", role: "alert", "{error}" }
            }
            if let Some(notice) = current.notice.clone() {
                div { class: "form-notice", role: "status", "{notice}" }
            }

            button {
                class: "primary-button",
                disabled: !ready,
                onclick: move |_| {
                    let email = state().email.trim().to_string();
                    let auth = auth.clone();
                    dispatch.call(AuthFormAction::Submit);
                    spawn(async move {
                        match auth.send_password_reset(&email).await {
                            Ok(()) => {
                                dispatch.call(AuthFormAction::Succeeded(Some(RESET_SENT_NOTICE.to_string())));
                            }
                            Err(e) => {
                                console_warn!("Password reset failed: {}", e);
                                dispatch.call(AuthFormAction::Failed(e.user_message()));
                            }
                        }
                    });
                },
                if current.is_submitting { "Sending..." } else { "Send reset link" }
            }

            div {
                class: "form-links",
                button {
                    class: "link-button",
                    onclick: move |_| navigate.call("/login".to_string()),
                    "Back to sign in"
                }
            }
        }
    }
}
