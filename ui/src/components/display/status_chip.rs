use dioxus::prelude::*;

use crate::records::Status;

#[derive(Props, PartialEq, Clone)]
pub struct StatusChipProps {
    pub status: Status,
}

#[component]
pub fn StatusChip(props: StatusChipProps) -> Element {
    let class = props.status.css_class();
    let label = props.status.name();

    rsx! {
        span {
            class: "{class}",
            "data-status": props.status.uid(),
            "{label}"
        }
    }
}
