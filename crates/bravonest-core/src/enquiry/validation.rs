//! Form state and presence/format validation.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use super::{Course, CourseEnquiry, FormPayload, ProjectEnquiry, ProjectType};

/// Toast text shown when any required field is empty
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// Inline text under a malformed email field
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap_or_else(|e| unreachable!("{e}"))
    })
}

/// Loose "looks like an address" check after trimming
pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value.trim())
}

/// One inline message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field id suffix, e.g. `"email"`
    pub field: &'static str,
    pub message: String,
}

/// Every problem found in one submission, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn require(&mut self, field: &'static str, label: &str, value: &str) -> bool {
        if value.trim().is_empty() {
            self.errors.push(FieldError {
                field,
                message: format!("{} is required.", label),
            });
            return false;
        }
        true
    }

    fn require_email(&mut self, field: &'static str, value: &str) {
        if self.require(field, "Email", value) && !is_valid_email(value) {
            self.errors.push(FieldError {
                field,
                message: INVALID_EMAIL_MESSAGE.to_string(),
            });
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Inline message for `field`, if it failed
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Whether any required field was left empty
    pub fn has_missing(&self) -> bool {
        self.errors.iter().any(|e| e.message != INVALID_EMAIL_MESSAGE)
    }

    /// One-line summary for a toast
    pub fn summary(&self) -> &'static str {
        if self.has_missing() {
            MISSING_FIELDS_MESSAGE
        } else {
            INVALID_EMAIL_MESSAGE
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        f.write_str(&messages.join(" "))
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Raw form state that can be checked and turned into a payload
pub trait EnquiryForm {
    fn validate(&self) -> Result<FormPayload, ValidationErrors>;
}

/// Project call request as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub name: String,
    pub email: String,
    /// Selected option value (`software`, `pcb`, `both`) or empty
    pub project_type: String,
    pub description: String,
    pub time_window: String,
}

impl EnquiryForm for ProjectForm {
    fn validate(&self) -> Result<FormPayload, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.require("name", "Full name", &self.name);
        errors.require_email("email", &self.email);
        let project_type = if errors.require("project-type", "Project type", &self.project_type) {
            let parsed = self.project_type.parse::<ProjectType>();
            if parsed.is_err() {
                errors.errors.push(FieldError {
                    field: "project-type",
                    message: "Select a project type.".to_string(),
                });
            }
            parsed.ok()
        } else {
            None
        };
        errors.require("description", "Description", &self.description);

        match project_type {
            Some(project_type) if errors.is_empty() => Ok(FormPayload::Project(ProjectEnquiry {
                name: self.name.trim().to_string(),
                email: self.email.trim().to_string(),
                project_type,
                description: self.description.trim().to_string(),
                time_window: optional(&self.time_window),
            })),
            _ => Err(errors),
        }
    }
}

/// Course enquiry as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseForm {
    pub name: String,
    pub email: String,
    /// Selected option value or empty
    pub course: String,
    pub message: String,
}

impl EnquiryForm for CourseForm {
    fn validate(&self) -> Result<FormPayload, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.require("name", "Full name", &self.name);
        errors.require_email("email", &self.email);
        let course = if errors.require("course", "Course", &self.course) {
            let parsed = self.course.parse::<Course>();
            if parsed.is_err() {
                errors.errors.push(FieldError {
                    field: "course",
                    message: "Select a course.".to_string(),
                });
            }
            parsed.ok()
        } else {
            None
        };

        match course {
            Some(course) if errors.is_empty() => Ok(FormPayload::Course(CourseEnquiry {
                name: self.name.trim().to_string(),
                email: self.email.trim().to_string(),
                course,
                message: optional(&self.message),
            })),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_project() -> ProjectForm {
        ProjectForm {
            name: " Grace ".into(),
            email: "grace@example.com".into(),
            project_type: "pcb".into(),
            description: "Motor controller".into(),
            time_window: "   ".into(),
        }
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("  first.last@sub.example.org "));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("@c.de"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn complete_project_form_validates() {
        let payload = filled_project().validate().unwrap();
        match payload {
            FormPayload::Project(p) => {
                assert_eq!(p.name, "Grace");
                assert_eq!(p.project_type, ProjectType::Pcb);
                assert_eq!(p.time_window, None);
            }
            other => panic!("unexpected payload {:?}", other),
        }
    }

    #[test]
    fn each_required_project_field_is_checked() {
        let blanks: [fn(&mut ProjectForm); 4] = [
            |f| f.name.clear(),
            |f| f.email.clear(),
            |f| f.project_type.clear(),
            |f| f.description = "  ".into(),
        ];
        for blank in blanks {
            let mut form = filled_project();
            blank(&mut form);
            let errors = form.validate().unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.summary(), MISSING_FIELDS_MESSAGE);
        }
    }

    #[test]
    fn malformed_email_gets_inline_message() {
        let mut form = filled_project();
        form.email = "grace-at-example".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.message_for("email"), Some(INVALID_EMAIL_MESSAGE));
        assert!(!errors.has_missing());
    }

    #[test]
    fn course_form_optional_message() {
        let form = CourseForm {
            name: "Lin".into(),
            email: "lin@example.com".into(),
            course: "embedded".into(),
            message: String::new(),
        };
        match form.validate().unwrap() {
            FormPayload::Course(c) => {
                assert_eq!(c.course, Course::Embedded);
                assert_eq!(c.message, None);
            }
            other => panic!("unexpected payload {:?}", other),
        }
    }

    #[test]
    fn empty_course_form_reports_all_required() {
        let errors = CourseForm::default().validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "email", "course"]);
        assert_eq!(errors.message_for("name"), Some("Full name is required."));
    }

    #[test]
    fn unknown_option_is_rejected() {
        let mut form = filled_project();
        form.project_type = "firmware".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.message_for("project-type"), Some("Select a project type."));
    }
}
