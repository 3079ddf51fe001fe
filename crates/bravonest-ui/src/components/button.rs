//! Button Components
//!
//! Button styles used across the site:
//! - Primary: filled brand colour, the main action of a section
//! - Outline: bordered, for secondary actions next to a primary one
//! - Ghost: text-only, for toolbar actions such as the theme toggle

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled brand button
    #[default]
    Primary,
    /// Transparent with a brand border
    Outline,
    /// No border or fill until hovered
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Ghost => "btn btn-ghost",
        }
    }
}

/// Call-to-action link styles (hero and section footers)
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CtaVariant {
    #[default]
    Primary,
    Secondary,
}

impl CtaVariant {
    pub fn class(&self) -> &'static str {
        match self {
            CtaVariant::Primary => "cta cta-primary",
            CtaVariant::Secondary => "cta cta-secondary",
        }
    }
}

/// Join a base class with optional extra classes
pub fn class_list(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Primary,
///         button_type: "submit".to_string(),
///         "Request Call"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = class_list(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (menu, close, theme)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Tooltip text
    #[props(default)]
    pub title: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = class_list("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            title: props.title.as_deref().unwrap_or(&props.aria_label),
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(
    onclick: EventHandler<()>,
    #[props(default = "Close".to_string())] aria_label: String,
) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: aria_label,
            class: "close-btn".to_string(),
            "\u{00D7}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn btn-primary");
        assert_eq!(ButtonVariant::Outline.class(), "btn btn-outline");
        assert_eq!(ButtonVariant::Ghost.class(), "btn btn-ghost");
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn cta_variant_classes() {
        assert_eq!(CtaVariant::Primary.class(), "cta cta-primary");
        assert_eq!(CtaVariant::Secondary.class(), "cta cta-secondary");
    }

    #[test]
    fn class_list_skips_blank_extras() {
        assert_eq!(class_list("btn", None), "btn");
        assert_eq!(class_list("btn", Some("  ")), "btn");
        assert_eq!(class_list("btn", Some("wide")), "btn wide");
    }
}
