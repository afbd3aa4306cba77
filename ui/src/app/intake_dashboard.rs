use dioxus::prelude::*;

use super::services::AppServices;
use crate::components::display::{ErrorBanner, LoadingIndicator};
use crate::components::records::{RecordTable, ScorePanel};
use crate::components::session::UserSessionPanel;
use crate::records::{AnswerSumRequest, RecordTableState};
use crate::services::errors::IntakeError;
use crate::session::AuthHandle;
use crate::{console_info, console_warn};

const INTAKE_CSS: Asset = asset!("/assets/styling/intake.css");

pub const LOGIN_PATH: &str = "/login";

#[derive(Props, PartialEq, Clone)]
pub struct IntakeDashboardProps {
    pub auth: AuthHandle,
    pub services: AppServices,
    pub navigate: EventHandler<String>,
}

#[component]
pub fn IntakeDashboard(props: IntakeDashboardProps) -> Element {
    let navigate = props.navigate;
    let services = props.services.clone();

    let mut records = use_signal(Vec::<AnswerSumRequest>::new);
    let mut load_error = use_signal(|| None::<IntakeError>);
    let mut is_loading = use_signal(|| false);
    let mut reload = use_signal(|| 0u32);
    let mut selected = use_signal(|| None::<AnswerSumRequest>);
    let rows_per_page = services.config.table.rows_per_page;
    let table_state = use_signal(move || RecordTableState::with_rows_per_page(rows_per_page));

    // Leave once the session has resolved without a user
    let auth = props.auth.clone();
    use_effect(move || {
        if auth.session().should_redirect_unauth() {
            console_info!("No signed-in user, redirecting to {}", LOGIN_PATH);
            navigate.call(LOGIN_PATH.to_string());
        }
    });

    // Load records whenever the user changes or a retry is requested
    let auth = props.auth.clone();
    let api = services.records.clone();
    use_effect(move || {
        let _attempt = reload();
        if !auth.session().is_authenticated() {
            return;
        }

        let auth = auth.clone();
        let api = api.clone();
        is_loading.set(true);
        load_error.set(None);
        spawn(async move {
            match api.list_assessments(&auth).await {
                Ok(loaded) => records.set(loaded),
                Err(e) => {
                    console_warn!("Failed to load assessments: {}", e);
                    let error = IntakeError::from(e);
                    if error.requires_sign_in() {
                        navigate.call(LOGIN_PATH.to_string());
                    }
                    load_error.set(Some(error));
                }
            }
            is_loading.set(false);
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: INTAKE_CSS }

        div {
            class: "intake-dashboard",

            UserSessionPanel {
                auth: props.auth.clone(),
                navigate: navigate,
            }

            if props.auth.session().is_authenticated() {
                div {
                    class: "dashboard-content",
                    h1 { class: "dashboard-title", "Assessments" }

                    if let Some(error) = load_error() {
                        ErrorBanner {
                            error,
                            on_retry: move |_| reload += 1,
                        }
                    }

                    if is_loading() {
                        LoadingIndicator { message: "Loading assessments...".to_string() }
                    } else {
                        RecordTable {
                            records: records(),
                            state: table_state,
                            on_select: move |record: AnswerSumRequest| selected.set(Some(record)),
                        }
                    }

                    if let Some(record) = selected() {
                        ScorePanel {
                            key: "{record.patient_id}",
                            record,
                            norms: services.norms.clone(),
                            on_close: move |_| selected.set(None),
                        }
                    }
                }
            }
        }
    }
}
