//! Input components for auth forms and the records toolbar

use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Password,
    Email,
    Search,
    Number,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
            InputType::Search => "search",
            InputType::Number => "number",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub label: String,
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    #[props(default = "input-field".to_string())]
    pub input_class: String,
    #[props(default)]
    pub autocomplete: String,
    #[props(default)]
    pub disabled: bool,
    /// Shown under the field when not empty
    #[props(default)]
    pub feedback: String,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    let input_type = props.input_type.as_str();

    rsx! {
        label {
            class: "input-section",
            span { class: "input-label", "{props.label}" }
            input {
                class: "{props.input_class}",
                r#type: "{input_type}",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                autocomplete: "{props.autocomplete}",
                disabled: props.disabled,
                oninput: move |event| props.on_change.call(event.value())
            }
            if !props.feedback.is_empty() {
                div { class: "validation-feedback", "{props.feedback}" }
            }
        }
    }
}
