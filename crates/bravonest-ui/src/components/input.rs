//! Form Field Components
//!
//! Labelled inputs for the enquiry forms. Every field takes an explicit `id`
//! so its label, error message and `aria-describedby` line up, and an
//! optional `error` that the form fills in after a failed submit.

use bravonest_core::enquiry::{is_valid_email, INVALID_EMAIL_MESSAGE};
use dioxus::prelude::*;

fn field_class(error: bool, extra: &str) -> String {
    match (error, extra.is_empty()) {
        (false, true) => "input-field".to_string(),
        (false, false) => format!("input-field {}", extra),
        (true, true) => "input-field invalid".to_string(),
        (true, false) => format!("input-field invalid {}", extra),
    }
}

/// Label with a required marker or an optional hint
#[component]
fn FieldLabel(id: String, label: String, required: bool, hint: Option<String>) -> Element {
    rsx! {
        label { class: "input-label", r#for: "{id}",
            "{label}"
            if required {
                span { class: "input-required", "aria-hidden": "true", " *" }
            }
            if let Some(hint) = &hint {
                span { class: "input-hint", " ({hint})" }
            }
        }
    }
}

/// Inline error under a field
#[component]
fn FieldError(id: String, message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            p { id: "{id}-error", class: "field-error", role: "alert", "{message}" }
        }
    }
}

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    pub id: String,
    pub label: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub onblur: Option<EventHandler<()>>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Hint after the label (e.g. "optional")
    #[props(default)]
    pub hint: Option<String>,
    /// Input type (text, email, tel, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub error: Option<String>,
    #[props(default)]
    pub class: Option<String>,
}

/// Single-line text input
///
/// # Example
///
/// ```rust,ignore
/// let mut name = use_signal(String::new);
///
/// rsx! {
///     Input {
///         id: "project-name".to_string(),
///         label: "Full Name".to_string(),
///         value: name(),
///         oninput: move |s| name.set(s),
///         required: true,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let input_class = field_class(props.error.is_some(), props.class.as_deref().unwrap_or(""));
    let onblur = props.onblur;

    rsx! {
        div { class: "form-field",
            FieldLabel {
                id: props.id.clone(),
                label: props.label.clone(),
                required: props.required,
                hint: props.hint.clone(),
            }
            input {
                id: "{props.id}",
                name: "{props.id}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                "aria-invalid": if props.error.is_some() { "true" } else { "false" },
                "aria-describedby": if props.error.is_some() { format!("{}-error", props.id) } else { String::new() },
                oninput: move |e| props.oninput.call(e.value()),
                onblur: move |_| {
                    if let Some(handler) = &onblur {
                        handler.call(());
                    }
                },
            }
            FieldError { id: props.id.clone(), message: props.error.clone() }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub id: String,
    pub label: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub hint: Option<String>,
    /// Number of visible rows
    #[props(default = 5)]
    pub rows: u32,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub error: Option<String>,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let class = field_class(props.error.is_some(), "textarea");

    rsx! {
        div { class: "form-field",
            FieldLabel {
                id: props.id.clone(),
                label: props.label.clone(),
                required: props.required,
                hint: props.hint.clone(),
            }
            textarea {
                id: "{props.id}",
                name: "{props.id}",
                class: "{class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                value: "{props.value}",
                "aria-invalid": if props.error.is_some() { "true" } else { "false" },
                oninput: move |e| props.oninput.call(e.value()),
            }
            FieldError { id: props.id.clone(), message: props.error.clone() }
        }
    }
}

/// One `<option>` of a [`Select`]
#[derive(Clone, PartialEq, Debug)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SelectProps {
    pub id: String,
    pub label: String,
    pub value: String,
    pub options: Vec<SelectOption>,
    pub onchange: EventHandler<String>,
    /// Disabled first entry shown while nothing is chosen
    #[props(default = "Select an option".to_string())]
    pub placeholder: String,
    #[props(default = false)]
    pub required: bool,
    #[props(default)]
    pub error: Option<String>,
}

/// Dropdown with a placeholder entry
#[component]
pub fn Select(props: SelectProps) -> Element {
    let class = field_class(props.error.is_some(), "select");

    rsx! {
        div { class: "form-field",
            FieldLabel {
                id: props.id.clone(),
                label: props.label.clone(),
                required: props.required,
                hint: None,
            }
            select {
                id: "{props.id}",
                name: "{props.id}",
                class: "{class}",
                required: props.required,
                value: "{props.value}",
                "aria-invalid": if props.error.is_some() { "true" } else { "false" },
                onchange: move |e| props.onchange.call(e.value()),
                option {
                    value: "",
                    disabled: true,
                    selected: props.value.is_empty(),
                    "{props.placeholder}"
                }
                for opt in props.options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == props.value,
                        "{opt.label}"
                    }
                }
            }
            FieldError { id: props.id.clone(), message: props.error.clone() }
        }
    }
}

/// Inline email message: nothing until the field has been left once, then
/// the format check for any non-empty value
pub fn email_error(value: &str, touched: bool) -> Option<&'static str> {
    if !touched || value.trim().is_empty() || is_valid_email(value) {
        None
    } else {
        Some(INVALID_EMAIL_MESSAGE)
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct EmailInputProps {
    pub id: String,
    #[props(default = "Email".to_string())]
    pub label: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default = "you@example.com".to_string())]
    pub placeholder: String,
    #[props(default = true)]
    pub required: bool,
    /// Error from a failed submit; wins over the blur check
    #[props(default)]
    pub error: Option<String>,
}

/// Email field that checks its format after the first blur
#[component]
pub fn EmailInput(props: EmailInputProps) -> Element {
    let mut touched = use_signal(|| false);
    let error = props
        .error
        .clone()
        .or_else(|| email_error(&props.value, touched()).map(str::to_string));

    rsx! {
        Input {
            id: props.id.clone(),
            label: props.label.clone(),
            value: props.value.clone(),
            oninput: props.oninput,
            onblur: move |_| touched.set(true),
            placeholder: props.placeholder.clone(),
            input_type: "email".to_string(),
            required: props.required,
            error: error,
        }
    }
}
