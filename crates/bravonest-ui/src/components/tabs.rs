//! Tabs Component
//!
//! Horizontal tab strip. Panels are rendered by the caller; the strip only
//! reports which tab was chosen.

use dioxus::prelude::*;

/// One tab in a [`Tabs`] strip
#[derive(Clone, PartialEq, Debug)]
pub struct TabItem {
    pub id: String,
    pub label: String,
}

impl TabItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct TabsProps {
    pub tabs: Vec<TabItem>,
    /// Id of the active tab
    pub selected: String,
    pub on_select: EventHandler<String>,
    #[props(default = "Sections".to_string())]
    pub aria_label: String,
}

/// # Example
///
/// ```rust,ignore
/// let mut tab = use_signal(|| "project".to_string());
///
/// rsx! {
///     Tabs {
///         tabs: vec![TabItem::new("project", "Project Call"), TabItem::new("course", "Course Enquiry")],
///         selected: tab(),
///         on_select: move |id| tab.set(id),
///     }
/// }
/// ```
#[component]
pub fn Tabs(props: TabsProps) -> Element {
    let selected = props.selected.clone();

    rsx! {
        div {
            class: "tabs",
            role: "tablist",
            "aria-label": "{props.aria_label}",
            for tab in props.tabs.iter() {
                {
                    let id = tab.id.clone();
                    let is_selected = selected == tab.id;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{tab.id}",
                            id: "tab-{tab.id}",
                            class: if is_selected { "tab active" } else { "tab" },
                            r#type: "button",
                            role: "tab",
                            "aria-selected": if is_selected { "true" } else { "false" },
                            "aria-controls": "panel-{tab.id}",
                            onclick: move |_| on_select.call(id.clone()),
                            "{tab.label}"
                        }
                    }
                }
            }
        }
    }
}
