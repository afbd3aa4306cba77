use dioxus::prelude::*;

use crate::components::display::LoadingIndicator;
use crate::session::{AuthHandle, SessionView, DISPLAY_NAME_FALLBACK, LOADING_TEXT};

#[derive(Props, PartialEq, Clone)]
pub struct ProfileCardProps {
    pub auth: AuthHandle,
    pub navigate: EventHandler<String>,
}

#[component]
pub fn ProfileCard(props: ProfileCardProps) -> Element {
    let navigate = props.navigate;
    let session = props.auth.session();

    let (email, display_name, uid) = match (SessionView::from_session(&session), &session.user) {
        (SessionView::Loading, _) => {
            return rsx! {
                LoadingIndicator { message: LOADING_TEXT.to_string() }
            }
        }
        (SessionView::SignedIn { email, display_name }, Some(user)) => {
            (email, display_name, user.uid.clone())
        }
        _ => (
            String::new(),
            DISPLAY_NAME_FALLBACK.to_string(),
            String::new(),
        ),
    };

    rsx! {
        div {
            class: "profile-card",
            h2 { class: "form-title", "Profile" }
            if uid.is_empty() {
                p { "You are not signed in." }
                button {
                    class: "primary-button",
                    onclick: move |_| navigate.call("/login".to_string()),
                    "Sign in"
                }
            } else {
                dl {
                    class: "profile-fields",
                    dt { "Display name" }
                    dd { "{display_name}" }
                    dt { "Email" }
                    dd { "{email}" }
                    dt { "User ID" }
                    dd { class: "mono", "{uid}" }
                }
                button {
                    class: "secondary-button",
                    onclick: move |_| navigate.call("/dashboard".to_string()),
                    "Back to dashboard"
                }
            }
        }
    }
}
