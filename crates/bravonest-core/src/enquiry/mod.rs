//! Contact-page enquiries.
//!
//! Two intents share one payload type: a project call request and a course
//! enquiry. Raw form state lives in [`ProjectForm`] / [`CourseForm`]; a
//! successful [`EnquiryForm::validate`] turns it into a [`FormPayload`] that is
//! handed by value to the dispatcher.

mod message;
mod validation;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use validation::{
    is_valid_email, CourseForm, EnquiryForm, FieldError, ProjectForm, ValidationErrors,
    INVALID_EMAIL_MESSAGE, MISSING_FIELDS_MESSAGE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Software,
    Pcb,
    Both,
}

impl ProjectType {
    pub const ALL: [ProjectType; 3] = [ProjectType::Software, ProjectType::Pcb, ProjectType::Both];

    /// Form value
    pub fn value(&self) -> &'static str {
        match self {
            ProjectType::Software => "software",
            ProjectType::Pcb => "pcb",
            ProjectType::Both => "both",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::Software => "Software Only",
            ProjectType::Pcb => "PCB Design Only",
            ProjectType::Both => "Software + PCB",
        }
    }
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectType::ALL
            .into_iter()
            .find(|t| t.value() == s)
            .ok_or_else(|| format!("unknown project type '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Course {
    Electronics,
    Programming,
    Pcb,
    Embedded,
    Custom,
}

impl Course {
    pub const ALL: [Course; 5] = [
        Course::Electronics,
        Course::Programming,
        Course::Pcb,
        Course::Embedded,
        Course::Custom,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Course::Electronics => "electronics",
            Course::Programming => "programming",
            Course::Pcb => "pcb",
            Course::Embedded => "embedded",
            Course::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Course::Electronics => "Foundations of Electronics & Circuits",
            Course::Programming => "Programming Basics for Engineering",
            Course::Pcb => "Introduction to PCB Design",
            Course::Embedded => "Embedded Systems Starter",
            Course::Custom => "Custom Course / Other",
        }
    }
}

impl FromStr for Course {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Course::ALL
            .into_iter()
            .find(|c| c.value() == s)
            .ok_or_else(|| format!("unknown course '{}'", s))
    }
}

/// A validated project call request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEnquiry {
    pub name: String,
    pub email: String,
    pub project_type: ProjectType,
    pub description: String,
    pub time_window: Option<String>,
}

/// A validated course enquiry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseEnquiry {
    pub name: String,
    pub email: String,
    pub course: Course,
    pub message: Option<String>,
}

/// Which form a payload came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Project,
    Course,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Project => f.write_str("project"),
            Intent::Course => f.write_str("course"),
        }
    }
}

/// Payload handed to the email dispatcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "lowercase")]
pub enum FormPayload {
    Project(ProjectEnquiry),
    Course(CourseEnquiry),
}

impl FormPayload {
    pub fn intent(&self) -> Intent {
        match self {
            FormPayload::Project(_) => Intent::Project,
            FormPayload::Course(_) => Intent::Course,
        }
    }

    pub fn sender_name(&self) -> &str {
        match self {
            FormPayload::Project(p) => &p.name,
            FormPayload::Course(c) => &c.name,
        }
    }

    pub fn sender_email(&self) -> &str {
        match self {
            FormPayload::Project(p) => &p.email,
            FormPayload::Course(c) => &c.email,
        }
    }

    pub fn subject(&self) -> String {
        message::subject(self)
    }

    /// Plain-text body; `site_name` appears in the footer
    pub fn body(&self, site_name: &str) -> String {
        message::body(self, site_name)
    }
}

impl From<ProjectEnquiry> for FormPayload {
    fn from(enquiry: ProjectEnquiry) -> Self {
        FormPayload::Project(enquiry)
    }
}

impl From<CourseEnquiry> for FormPayload {
    fn from(enquiry: CourseEnquiry) -> Self {
        FormPayload::Course(enquiry)
    }
}
