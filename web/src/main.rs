use std::rc::Rc;

use dioxus::prelude::*;
use ui::components::forms::{ResetPasswordForm, SignInForm, SignUpForm};
use ui::components::session::ProfileCard;
use ui::services::config::IntakeConfig;
use ui::services::errors::IntakeError;
use ui::services::identity::{IdentityProvider, RestIdentityProvider};
use ui::{console_error, console_info, console_warn};
use ui::{AppServices, AuthHandle, IntakeDashboard, Session};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        let config = IntakeConfig::from_build_env();
        if let Err(errors) = config.validate() {
            console_error!("{}", IntakeError::Configuration(errors));
        }
        config
    });

    let session = use_signal(Session::default);
    let identity = config.identity.clone();
    let auth = use_hook(move || {
        AuthHandle::new(Rc::new(RestIdentityProvider::for_browser(identity)), session)
    });
    let services = use_hook(move || AppServices::from_config(config));

    use_context_provider(|| services);
    let auth = use_context_provider(|| auth);

    // Resolve any stored session once on startup
    use_effect(move || {
        let auth = auth.clone();
        spawn(async move {
            match auth.restore().await {
                Ok(Some(user)) => console_info!("Restored session for {}", user.email),
                Ok(None) => console_info!("No stored session"),
                Err(e) => console_warn!("Could not restore session: {}", e),
            }
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Patient Intake" }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[redirect("/", || Route::Home {})]
    #[route("/home")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    SignUp {},
    #[route("/forgot-password")]
    ForgotPassword {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/profile")]
    Profile {},
}

/// Route-path navigation for the shared components
fn use_path_navigator() -> EventHandler<String> {
    let nav = navigator();
    EventHandler::new(move |path: String| match path.parse::<Route>() {
        Ok(route) => {
            nav.push(route);
        }
        Err(e) => console_warn!("Unknown route {}: {}", path, e),
    })
}

#[component]
fn Home() -> Element {
    let auth = use_context::<AuthHandle>();
    let navigate = use_path_navigator();
    let signed_in = auth.session().is_authenticated();

    rsx! {
        div {
            class: "page auth-page",
            div {
                class: "home-card",
                h1 { "Patient Intake" }
                p { "Review submitted assessments and score them against the norm tables." }
                if signed_in {
                    button {
                        class: "primary-button",
                        onclick: move |_| navigate.call("/dashboard".to_string()),
                        "Go to dashboard"
                    }
                } else {
                    button {
                        class: "primary-button",
                        onclick: move |_| navigate.call("/login".to_string()),
                        "Sign in"
                    }
                    div {
                        class: "form-links",
                        button {
                            class: "link-button",
                            onclick: move |_| navigate.call("/signup".to_string()),
                            "Create an account"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Login() -> Element {
    let auth = use_context::<AuthHandle>();
    let navigate = use_path_navigator();

    rsx! {
        div {
            class: "page auth-page",
            SignInForm { auth, navigate }
        }
    }
}

#[component]
fn SignUp() -> Element {
    let auth = use_context::<AuthHandle>();
    let navigate = use_path_navigator();

    rsx! {
        div {
            class: "page auth-page",
            SignUpForm { auth, navigate }
        }
    }
}

#[component]
fn ForgotPassword() -> Element {
    let auth = use_context::<AuthHandle>();
    let navigate = use_path_navigator();

    rsx! {
        div {
            class: "page auth-page",
            ResetPasswordForm { auth, navigate }
        }
    }
}

#[component]
fn Dashboard() -> Element {
    let auth = use_context::<AuthHandle>();
    let services = use_context::<AppServices>();
    let navigate = use_path_navigator();

    rsx! {
        div {
            class: "page",
            IntakeDashboard { auth, services, navigate }
        }
    }
}

#[component]
fn Profile() -> Element {
    let auth = use_context::<AuthHandle>();
    let navigate = use_path_navigator();

    rsx! {
        div {
            class: "page auth-page",
            ProfileCard { auth, navigate }
        }
    }
}
