use dioxus::prelude::*;

use super::form_state::{AuthFormAction, AuthFormState};
use crate::components::inputs::{InputType, ValidatedInput};
use crate::services::identity::IdentityProvider;
use crate::session::AuthHandle;
use crate::utils::{email_validation_class, sign_in_ready, validate_email};
use crate::{console_info, console_warn};

pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Props, PartialEq, Clone)]
pub struct SignInFormProps {
    pub auth: AuthHandle,
    pub navigate: EventHandler<String>,
}

#[component]
pub fn SignInForm(props: SignInFormProps) -> Element {
    let navigate = props.navigate;
    let mut state = use_signal(AuthFormState::default);
    let dispatch = EventHandler::new(move |action: AuthFormAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    let current = state();
    let email_class = email_validation_class(&validate_email(&current.email));
    let ready = sign_in_ready(&current.email, &current.password) && !current.is_submitting;
    let auth = props.auth.clone();

    rsx! {
        div {
            class: "auth-form",
            h2 { class: "form-title", "Sign in" }

            ValidatedInput {
                label: "Email".to_string(),
                value: current.email.clone(),
                placeholder: "you@clinic.org".to_string(),
                input_type: InputType::Email,
                input_class: email_class.to_string(),
                autocomplete: "email".to_string(),
                disabled: current.is_submitting,
                on_change: move |value: String| dispatch.call(AuthFormAction::SetEmail(value)),
            }
            ValidatedInput {
                label: "Password".to_string(),
                value: current.password.clone(),
                placeholder: "Password".to_string(),
                input_type: InputType::Password,
                autocomplete: "current-password".to_string(),
                disabled: current.is_submitting,
                on_change: move |value: String| dispatch.call(AuthFormAction::SetPassword(value)),
            }

            if let Some(error) = current.error.clone() {
                div { class: "form-error", role: "alert", "{error}" }
            }

            button {
                class: "primary-button",
                disabled: !ready,
                onclick: move |_| {
                    let form = state();
                    let auth = auth.clone();
                    dispatch.call(AuthFormAction::Submit);
                    spawn(async move {
                        match auth.sign_in(form.email.trim(), &form.password).await {
                            Ok(user) => {
                                console_info!("Signed in as {}", user.email);
                                dispatch.call(AuthFormAction::Succeeded(None));
                                navigate.call(DASHBOARD_PATH.to_string());
                            }
                            Err(e) => {
                                console_warn!("Sign-in failed: {}", e);
                                dispatch.call(AuthFormAction::Failed(e.user_message()));
                            }
                        }
                    });
                },
                if current.is_submitting { "Signing in..." } else { "Sign in" }
            }

            div {
                class: "form-links",
                button {
                    class: "link-button",
                    onclick: move |_| navigate.call("/forgot-password".to_string()),
                    "Forgot password?"
                }
                button {
                    class: "link-button",
                    onclick: move |_| navigate.call("/signup".to_string()),
                    "Create an account"
                }
            }
        }
    }
}
