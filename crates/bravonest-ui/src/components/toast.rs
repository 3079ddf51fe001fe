//! Toast Notifications
//!
//! Transient messages in the corner of the viewport. [`ToastQueue`] is the
//! plain state; the app keeps it in a signal, schedules the dismissal timer
//! and renders it with [`ToastViewport`].

use std::time::Duration;

use dioxus::prelude::*;

/// How long a toast stays up before it is dismissed automatically
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

/// At most this many toasts are shown; older ones are dropped first
pub const TOAST_LIMIT: usize = 3;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

impl ToastVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ToastVariant::Default => "toast",
            ToastVariant::Destructive => "toast toast-destructive",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a toast and return its id
    pub fn push(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        variant: ToastVariant,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            title: title.into(),
            description: description.into(),
            variant,
        });
        if self.toasts.len() > TOAST_LIMIT {
            let overflow = self.toasts.len() - TOAST_LIMIT;
            self.toasts.drain(..overflow);
        }
        id
    }

    /// Remove the toast with `id`. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ToastViewportProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: EventHandler<u64>,
}

#[component]
pub fn ToastViewport(props: ToastViewportProps) -> Element {
    rsx! {
        ol { class: "toast-viewport", "aria-live": "polite",
            for toast in props.toasts.iter() {
                {
                    let id = toast.id;
                    let on_dismiss = props.on_dismiss;
                    rsx! {
                        li {
                            key: "{toast.id}",
                            class: toast.variant.class(),
                            role: if toast.variant == ToastVariant::Destructive { "alert" } else { "status" },
                            div { class: "toast-body",
                                p { class: "toast-title", "{toast.title}" }
                                if !toast.description.is_empty() {
                                    p { class: "toast-description", "{toast.description}" }
                                }
                            }
                            button {
                                class: "toast-close",
                                r#type: "button",
                                "aria-label": "Dismiss notification",
                                onclick: move |_| on_dismiss.call(id),
                                "\u{00D7}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut queue = ToastQueue::new();
        let a = queue.push("Sent", "", ToastVariant::Default);
        let b = queue.push("Oops", "Try again", ToastVariant::Destructive);
        assert!(b > a);
        assert_eq!(queue.toasts().len(), 2);
    }

    #[test]
    fn dismiss_removes_once() {
        let mut queue = ToastQueue::new();
        let id = queue.push("Sent", "", ToastVariant::Default);
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn oldest_toasts_dropped_past_limit() {
        let mut queue = ToastQueue::new();
        for i in 0..TOAST_LIMIT + 2 {
            queue.push(format!("t{}", i), "", ToastVariant::Default);
        }
        assert_eq!(queue.toasts().len(), TOAST_LIMIT);
        assert_eq!(queue.toasts()[0].title, "t2");
    }
}
