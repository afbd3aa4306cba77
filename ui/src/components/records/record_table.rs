use dioxus::prelude::*;

use crate::components::display::StatusChip;
use crate::components::inputs::{InputType, ValidatedInput};
use crate::records::{
    AnswerSumRequest, Column, RecordTableState, SortDirection, COLUMNS, STATUS_OPTIONS,
};

#[derive(Props, PartialEq, Clone)]
pub struct RecordTableProps {
    pub records: Vec<AnswerSumRequest>,
    pub state: Signal<RecordTableState>,
    /// Fired by the actions column
    pub on_select: EventHandler<AnswerSumRequest>,
}

#[component]
pub fn RecordTable(props: RecordTableProps) -> Element {
    let mut state = props.state;
    let on_select = props.on_select;

    let current = state();
    let records = props.records.clone();
    let page_count = current.page_count(&records);
    let page = current.page.clamp(1, page_count);
    let visible: Vec<AnswerSumRequest> = current.visible(&records).into_iter().cloned().collect();
    let matched = current.filtered(&records).len();

    rsx! {
        div {
            class: "record-table",

            // Toolbar
            div {
                class: "record-toolbar",
                ValidatedInput {
                    label: "Search".to_string(),
                    value: current.filter.clone(),
                    placeholder: "Search by patient name...".to_string(),
                    input_type: InputType::Search,
                    on_change: move |value: String| state.with_mut(|s| s.set_filter(value)),
                }
                if !current.filter.is_empty() {
                    button {
                        class: "clear-button",
                        onclick: move |_| state.with_mut(|s| s.clear_filter()),
                        "Clear"
                    }
                }
                fieldset {
                    class: "status-filter",
                    legend { "Status" }
                    for status in STATUS_OPTIONS {
                        label {
                            key: "{status.uid()}",
                            class: "status-option",
                            input {
                                r#type: "checkbox",
                                checked: current.status_filter.contains(&status),
                                onchange: move |_| state.with_mut(|s| s.toggle_status(status)),
                            }
                            "{status.name()}"
                        }
                    }
                }
                span { class: "record-count", "{matched} of {records.len()} records" }
            }

            table {
                thead {
                    tr {
                        for column in COLUMNS {
                            th {
                                key: "{column.uid()}",
                                class: if column.sortable() { "sortable" } else { "" },
                                onclick: move |_| state.with_mut(|s| s.set_sort(column)),
                                "{column.name()}"
                                if current.sort.column == column {
                                    span {
                                        class: "sort-indicator",
                                        {sort_arrow(current.sort.direction)}
                                    }
                                }
                            }
                        }
                    }
                }
                tbody {
                    if visible.is_empty() {
                        tr {
                            td {
                                colspan: "{COLUMNS.len()}",
                                class: "empty-row",
                                "No records found"
                            }
                        }
                    }
                    for record in visible {
                        RecordRow {
                            key: "{record.patient_id}",
                            record: record.clone(),
                            on_select: on_select,
                        }
                    }
                }
            }

            // Pagination
            div {
                class: "pagination",
                button {
                    class: "page-button",
                    disabled: page <= 1,
                    onclick: move |_| state.with_mut(|s| s.set_page(page - 1)),
                    "Previous"
                }
                span { class: "page-label", "Page {page} of {page_count}" }
                button {
                    class: "page-button",
                    disabled: page >= page_count,
                    onclick: move |_| state.with_mut(|s| s.set_page(page + 1)),
                    "Next"
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
struct RecordRowProps {
    record: AnswerSumRequest,
    on_select: EventHandler<AnswerSumRequest>,
}

#[component]
fn RecordRow(props: RecordRowProps) -> Element {
    let on_select = props.on_select;
    let record = props.record.clone();

    rsx! {
        tr {
            for column in COLUMNS {
                td {
                    key: "{column.uid()}",
                    {match column {
                        Column::Status => rsx! { StatusChip { status: record.status } },
                        Column::Actions => {
                            let selected = record.clone();
                            rsx! {
                                button {
                                    class: "action-button",
                                    onclick: move |_| on_select.call(selected.clone()),
                                    "Scores"
                                }
                            }
                        }
                        _ => {
                            let text = record.cell(column).unwrap_or_default();
                            rsx! { "{text}" }
                        }
                    }}
                }
            }
        }
    }
}

fn sort_arrow(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => " \u{25b2}",
        SortDirection::Descending => " \u{25bc}",
    }
}
