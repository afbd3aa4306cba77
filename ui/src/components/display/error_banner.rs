use dioxus::prelude::*;

use crate::services::errors::{ErrorSeverity, IntakeError};

#[derive(Props, PartialEq, Clone)]
pub struct ErrorBannerProps {
    pub error: IntakeError,
    #[props(default)]
    pub on_retry: Option<EventHandler<()>>,
}

#[component]
pub fn ErrorBanner(props: ErrorBannerProps) -> Element {
    let class = match props.error.severity() {
        ErrorSeverity::Low => "error-banner notice",
        ErrorSeverity::Medium => "error-banner warning",
        ErrorSeverity::High => "error-banner critical",
    };
    let message = props.error.user_message();
    let retryable = props.error.is_temporary();

    rsx! {
        div {
            class: "{class}",
            role: "alert",
            span { class: "error-message", "{message}" }
            if retryable {
                if let Some(on_retry) = props.on_retry {
                    button {
                        class: "retry-button",
                        onclick: move |_| on_retry.call(()),
                        "Try again"
                    }
                }
            }
        }
    }
}
