//! Subject and body text for enquiry mail.

use super::FormPayload;

pub(super) fn subject(payload: &FormPayload) -> String {
    match payload {
        FormPayload::Project(p) => format!("Project Call Request - {}", p.project_type.label()),
        FormPayload::Course(c) => format!("Course Enquiry - {}", c.course.label()),
    }
}

pub(super) fn body(payload: &FormPayload, site_name: &str) -> String {
    let (name, email, details) = match payload {
        FormPayload::Project(p) => {
            let window = p.time_window.as_deref().unwrap_or("Not specified");
            let details = format!(
                "New Project Call Request\n\n\
                 Name: {}\n\
                 Email: {}\n\
                 Project Type: {}\n\
                 Preferred Time Window: {}\n\n\
                 Description:\n{}",
                p.name,
                p.email,
                p.project_type.label(),
                window,
                p.description
            );
            (&p.name, &p.email, details)
        }
        FormPayload::Course(c) => {
            let message = c
                .message
                .as_deref()
                .unwrap_or("No additional message provided");
            let details = format!(
                "New Course Enquiry\n\n\
                 Name: {}\n\
                 Email: {}\n\
                 Course of Interest: {}\n\n\
                 Message:\n{}",
                c.name,
                c.email,
                c.course.label(),
                message
            );
            (&c.name, &c.email, details)
        }
    };

    format!(
        "{details}\n\n---\n\
         This email was sent from the {site_name} website contact form.\n\
         Reply directly to this email to respond to {name} at {email}"
    )
}

#[cfg(test)]
mod tests {
    use crate::enquiry::{Course, CourseEnquiry, FormPayload, ProjectEnquiry, ProjectType};

    fn project() -> FormPayload {
        FormPayload::Project(ProjectEnquiry {
            name: "Grace".into(),
            email: "grace@example.com".into(),
            project_type: ProjectType::Both,
            description: "Sensor board plus dashboard".into(),
            time_window: None,
        })
    }

    #[test]
    fn project_subject_uses_type_label() {
        assert_eq!(project().subject(), "Project Call Request - Software + PCB");
    }

    #[test]
    fn project_body_lists_fields_and_defaults() {
        let body = project().body("Bravonest");
        assert!(body.starts_with("New Project Call Request\n\nName: Grace\n"));
        assert!(body.contains("Project Type: Software + PCB"));
        assert!(body.contains("Preferred Time Window: Not specified"));
        assert!(body.contains("Description:\nSensor board plus dashboard"));
        assert!(body.ends_with("respond to Grace at grace@example.com"));
        assert!(body.contains("sent from the Bravonest website contact form."));
    }

    #[test]
    fn course_body_defaults_missing_message() {
        let payload = FormPayload::Course(CourseEnquiry {
            name: "Lin".into(),
            email: "lin@example.com".into(),
            course: Course::Pcb,
            message: None,
        });
        assert_eq!(payload.subject(), "Course Enquiry - Introduction to PCB Design");
        let body = payload.body("Bravonest");
        assert!(body.contains("Course of Interest: Introduction to PCB Design"));
        assert!(body.contains("Message:\nNo additional message provided"));
    }
}
