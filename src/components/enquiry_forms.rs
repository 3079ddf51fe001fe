//! Project and course enquiry forms.
//!
//! Both follow the same flow: validate on submit, show inline messages and
//! a destructive toast when something is missing, otherwise hand the
//! payload to the dispatcher, toast the outcome and clear the form.

use bravonest_core::{
    Course, CourseForm, DispatchOutcome, EnquiryForm, FormPayload, ProjectForm, ProjectType,
    ValidationErrors,
};
use bravonest_ui::{
    ButtonVariant, EmailInput, Input, InteractiveButton, Select, SelectOption, TextArea,
};
use dioxus::prelude::*;

use crate::context::{use_dispatcher, use_toasts, SharedDispatcher, Toasts};

const NAME_PLACEHOLDER: &str = "Enter your full name";
const EMAIL_PLACEHOLDER: &str = "your.email@example.com";

/// Toast title for a rejected submission
pub fn validation_title(errors: &ValidationErrors) -> &'static str {
    if errors.has_missing() {
        "Missing Information"
    } else {
        "Invalid Email"
    }
}

/// Toast for a dispatched enquiry. A hand-off replaces the success copy,
/// since the message only leaves once the visitor presses send.
pub fn outcome_toast(
    outcome: &DispatchOutcome,
    success_title: &'static str,
    success_description: &'static str,
) -> (&'static str, &'static str) {
    match outcome {
        DispatchOutcome::Delivered { .. } => (success_title, success_description),
        DispatchOutcome::HandedOff { .. } => (
            "Opening Your Email App",
            "We couldn't reach our mail service, so your message is ready to send from your email client.",
        ),
    }
}

fn error_for(errors: &ValidationErrors, field: &str) -> Option<String> {
    errors.message_for(field).map(str::to_string)
}

/// Claim the form for one dispatch. False while an earlier one is pending.
fn begin_send(sending: &mut bool) -> bool {
    if *sending {
        return false;
    }
    *sending = true;
    true
}

/// Validate `form`; on success dispatch it and run `on_sent` once it left
fn submit(
    form: &dyn EnquiryForm,
    dispatcher: SharedDispatcher,
    mut errors: Signal<ValidationErrors>,
    mut sending: Signal<bool>,
    mut toasts: Toasts,
    success: (&'static str, &'static str),
    on_sent: impl FnOnce() + 'static,
) {
    if !begin_send(&mut sending.write()) {
        tracing::debug!("Enquiry already sending, ignoring resubmit");
        return;
    }
    let payload: FormPayload = match form.validate() {
        Ok(payload) => payload,
        Err(found) => {
            sending.set(false);
            toasts.error(validation_title(&found), found.summary());
            errors.set(found);
            return;
        }
    };
    errors.set(ValidationErrors::default());

    spawn(async move {
        let result = dispatcher.dispatch(&payload).await;
        sending.set(false);
        match result {
            Ok(outcome) => {
                tracing::info!(provider = outcome.provider(), "Enquiry sent");
                let (title, description) = outcome_toast(&outcome, success.0, success.1);
                toasts.show(title, description);
                on_sent();
            }
            Err(e) => {
                tracing::warn!("Enquiry not sent: {}", e);
                toasts.error(
                    "Message Not Sent",
                    "Something went wrong. Please email us directly.",
                );
            }
        }
    });
}

/// Project call request form (the `#project-call` card on the contact page)
#[component]
pub fn ProjectEnquiryForm() -> Element {
    let dispatcher = use_dispatcher();
    let toasts = use_toasts();
    let mut form = use_signal(ProjectForm::default);
    let errors = use_signal(ValidationErrors::default);
    let sending = use_signal(|| false);

    let type_options: Vec<SelectOption> = ProjectType::ALL
        .iter()
        .map(|t| SelectOption::new(t.value(), t.label()))
        .collect();
    let current = form();
    let found = errors();

    rsx! {
        form {
            class: "enquiry-form",
            novalidate: true,
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                let snapshot = form.peek().clone();
                submit(
                    &snapshot,
                    dispatcher.clone(),
                    errors,
                    sending,
                    toasts,
                    (
                        "Call Request Received!",
                        "We'll reach out within 24 hours to schedule your project call.",
                    ),
                    move || form.set(ProjectForm::default()),
                );
            },
            Input {
                id: "project-name".to_string(),
                label: "Full Name".to_string(),
                value: current.name.clone(),
                oninput: move |v| form.write().name = v,
                placeholder: NAME_PLACEHOLDER.to_string(),
                required: true,
                error: error_for(&found, "name"),
            }
            EmailInput {
                id: "project-email".to_string(),
                value: current.email.clone(),
                oninput: move |v| form.write().email = v,
                placeholder: EMAIL_PLACEHOLDER.to_string(),
                error: error_for(&found, "email"),
            }
            Select {
                id: "project-type".to_string(),
                label: "Project Type".to_string(),
                value: current.project_type.clone(),
                options: type_options,
                onchange: move |v| form.write().project_type = v,
                placeholder: "Select project type".to_string(),
                required: true,
                error: error_for(&found, "project-type"),
            }
            TextArea {
                id: "project-description".to_string(),
                label: "Brief Description".to_string(),
                value: current.description.clone(),
                oninput: move |v| form.write().description = v,
                placeholder: "Tell us about your project, goals, and any specific requirements...".to_string(),
                required: true,
                error: error_for(&found, "description"),
            }
            Input {
                id: "time-window".to_string(),
                label: "Preferred Time Window".to_string(),
                value: current.time_window.clone(),
                oninput: move |v| form.write().time_window = v,
                placeholder: "e.g., Weekday mornings, Tuesday/Thursday afternoons".to_string(),
                hint: "optional".to_string(),
            }
            InteractiveButton {
                button_type: "submit".to_string(),
                disabled: sending(),
                class: "btn-block".to_string(),
                if sending() { "Sending..." } else { "Request a Call" }
            }
        }
    }
}

/// Where a course form is shown; decides its ids and copy
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CourseFormKind {
    /// Tab on the contact page
    Enquiry,
    /// `#register` section of the learn page
    Registration,
}

impl CourseFormKind {
    pub fn field_id(&self, field: &str) -> String {
        match self {
            CourseFormKind::Enquiry => match field {
                "course" => "course-interest".to_string(),
                other => format!("course-{}", other),
            },
            CourseFormKind::Registration => format!("register-{}", field),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            CourseFormKind::Enquiry => "Submit Course Enquiry",
            CourseFormKind::Registration => "Submit Registration",
        }
    }

    fn message_label(&self) -> &'static str {
        match self {
            CourseFormKind::Enquiry => "Message",
            CourseFormKind::Registration => "Message / Expectations",
        }
    }

    fn message_placeholder(&self) -> &'static str {
        match self {
            CourseFormKind::Enquiry => {
                "Tell us about your background, learning goals, or any questions..."
            }
            CourseFormKind::Registration => {
                "Tell us about your background and what you hope to learn..."
            }
        }
    }

    fn message_rows(&self) -> u32 {
        match self {
            CourseFormKind::Enquiry => 5,
            CourseFormKind::Registration => 4,
        }
    }

    pub fn success(&self) -> (&'static str, &'static str) {
        match self {
            CourseFormKind::Enquiry => (
                "Enquiry Received!",
                "Our team will respond to your course enquiry soon.",
            ),
            CourseFormKind::Registration => (
                "Registration Received!",
                "We'll contact you with the next available batch details.",
            ),
        }
    }
}

#[component]
pub fn CourseEnquiryForm(kind: CourseFormKind) -> Element {
    let dispatcher = use_dispatcher();
    let toasts = use_toasts();
    let mut form = use_signal(CourseForm::default);
    let errors = use_signal(ValidationErrors::default);
    let sending = use_signal(|| false);

    let course_options: Vec<SelectOption> = Course::ALL
        .iter()
        .map(|c| SelectOption::new(c.value(), c.label()))
        .collect();
    let current = form();
    let found = errors();

    rsx! {
        form {
            class: "enquiry-form",
            novalidate: true,
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                let snapshot = form.peek().clone();
                submit(
                    &snapshot,
                    dispatcher.clone(),
                    errors,
                    sending,
                    toasts,
                    kind.success(),
                    move || form.set(CourseForm::default()),
                );
            },
            Input {
                id: kind.field_id("name"),
                label: "Full Name".to_string(),
                value: current.name.clone(),
                oninput: move |v| form.write().name = v,
                placeholder: NAME_PLACEHOLDER.to_string(),
                required: true,
                error: error_for(&found, "name"),
            }
            EmailInput {
                id: kind.field_id("email"),
                value: current.email.clone(),
                oninput: move |v| form.write().email = v,
                placeholder: EMAIL_PLACEHOLDER.to_string(),
                error: error_for(&found, "email"),
            }
            Select {
                id: kind.field_id("course"),
                label: "Course of Interest".to_string(),
                value: current.course.clone(),
                options: course_options,
                onchange: move |v| form.write().course = v,
                placeholder: "Select a course".to_string(),
                required: true,
                error: error_for(&found, "course"),
            }
            TextArea {
                id: kind.field_id("message"),
                label: kind.message_label().to_string(),
                value: current.message.clone(),
                oninput: move |v| form.write().message = v,
                placeholder: kind.message_placeholder().to_string(),
                rows: kind.message_rows(),
                hint: "optional".to_string(),
            }
            InteractiveButton {
                button_type: "submit".to_string(),
                disabled: sending(),
                variant: ButtonVariant::Outline,
                class: "btn-block".to_string(),
                if sending() { "Sending..." } else { "{kind.submit_label()}" }
            }
        }
    }
}
