//! Interactive Button
//!
//! A button carrying the `data-cursor` marker, so the custom cursor
//! switches to its interactive style while hovering anywhere inside it.

use dioxus::prelude::*;

use super::button::{class_list, ButtonVariant};

#[derive(Clone, PartialEq, Props)]
pub struct InteractiveButtonProps {
    pub children: Element,
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default)]
    pub class: Option<String>,
    #[props(default = "button".to_string())]
    pub button_type: String,
    #[props(default = false)]
    pub disabled: bool,
}

#[component]
pub fn InteractiveButton(props: InteractiveButtonProps) -> Element {
    let base = format!("{} interactive-btn", props.variant.class());
    let full_class = class_list(&base, props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            "data-cursor": "true",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            span { class: "interactive-btn-label", {props.children} }
        }
    }
}
