use dioxus::prelude::*;

use super::form_state::{AuthFormAction, AuthFormState};
use super::login_form::DASHBOARD_PATH;
use crate::components::inputs::{InputType, ValidatedInput};
use crate::services::identity::IdentityProvider;
use crate::session::AuthHandle;
use crate::utils::{
    email_validation_class, password_validation_class, password_validation_message,
    sign_up_ready, validate_email, validate_new_password,
};
use crate::{console_info, console_warn};

#[derive(Props, PartialEq, Clone)]
pub struct SignUpFormProps {
    pub auth: AuthHandle,
    pub navigate: EventHandler<String>,
}

#[component]
pub fn SignUpForm(props: SignUpFormProps) -> Element {
    let navigate = props.navigate;
    let mut state = use_signal(AuthFormState::default);
    let dispatch = EventHandler::new(move |action: AuthFormAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    let current = state();
    let email_class = email_validation_class(&validate_email(&current.email));
    let password_check = validate_new_password(&current.password, &current.confirm_password);
    let password_class = password_validation_class(&password_check);
    let password_feedback = password_validation_message(&password_check).unwrap_or_default();
    let ready = sign_up_ready(&current.email, &current.password, &current.confirm_password)
        && !current.is_submitting;
    let auth = props.auth.clone();

    rsx! {
        div {
            class: "auth-form",
            h2 { class: "form-title", "Create account" }

            ValidatedInput {
                label: "Display name (optional)".to_string(),
                value: current.display_name.clone(),
                placeholder: "Dr. Jane Doe".to_string(),
                input_type: InputType::Text,
                autocomplete: "name".to_string(),
                disabled: current.is_submitting,
                on_change: move |value: String| dispatch.call(AuthFormAction::SetDisplayName(value)),
            }
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
                placeholder: "At least 6 characters".to_string(),
                input_type: InputType::Password,
                input_class: password_class.to_string(),
                autocomplete: "new-password".to_string(),
                disabled: current.is_submitting,
                on_change: move |value: String| dispatch.call(AuthFormAction::SetPassword(value)),
            }
            ValidatedInput {
                label: "Confirm password".to_string(),
                value: current.confirm_password.clone(),
                placeholder: "Repeat password".to_string(),
                input_type: InputType::Password,
                input_class: password_class.to_string(),
                autocomplete: "new-password".to_string(),
                disabled: current.is_submitting,
                feedback: password_feedback,
                on_change: move |value: String| dispatch.call(AuthFormAction::SetConfirmPassword(value)),
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
                        let result = auth
                            .sign_up(form.email.trim(), &form.password, form.display_name())
                            .await;
                        match result {
                            Ok(user) => {
                                console_info!("Account created for {}", user.email);
                                dispatch.call(AuthFormAction::Succeeded(None));
                                navigate.call(DASHBOARD_PATH.to_string());
                            }
                            Err(e) => {
                                console_warn!("Sign-up failed: {}", e);
                                dispatch.call(AuthFormAction::Failed(e.user_message()));
                            }
                        }
                    });
                },
                if current.is_submitting { "Creating account..." } else { "Sign up" }
            }

            div {
                class: "form-links",
                button {
                    class: "link-button",
                    onclick: move |_| navigate.call("/login".to_string()),
                    "Already have an account? Sign in"
                }
            }
        }
    }
}
