use dioxus::prelude::*;

use crate::components::display::LoadingIndicator;
use crate::session::{handle_sign_out, AuthHandle, ConsoleDiagnostics, SessionView, LOADING_TEXT};

pub const PROFILE_PATH: &str = "/profile";

#[derive(Props, PartialEq, Clone)]
pub struct UserSessionPanelProps {
    pub auth: AuthHandle,
    /// Receives route paths; the web shell maps them onto its router
    pub navigate: EventHandler<String>,
}

/// Header and account summary shown above the dashboard.
///
/// Renders nothing but the loading placeholder until the session resolves.
#[component]
pub fn UserSessionPanel(props: UserSessionPanelProps) -> Element {
    let navigate = props.navigate;
    let view = SessionView::from_session(&props.auth.session());

    if view == SessionView::Loading {
        return rsx! {
            LoadingIndicator { message: LOADING_TEXT.to_string() }
        };
    }

    let lines = view.body_lines();
    let auth = props.auth.clone();

    rsx! {
        div {
            class: "session-panel",

            header {
                class: "session-header",
                div {
                    class: "brand",
                    span { class: "brand-mark", "+" }
                    span { class: "brand-name", "Patient Intake" }
                }
                button {
                    class: "profile-button",
                    title: "Profile",
                    onclick: move |_| navigate.call(PROFILE_PATH.to_string()),
                    "Profile"
                }
            }

            div {
                class: "session-body",
                for line in lines {
                    p { class: "session-line", "{line}" }
                }
                if view.shows_sign_out() {
                    button {
                        class: "sign-out-button",
                        onclick: move |_| {
                            let auth = auth.clone();
                            spawn(async move {
                                handle_sign_out(&auth, &navigate, &ConsoleDiagnostics).await;
                            });
                        },
                        "Sign out"
                    }
                }
            }
        }
    }
}
