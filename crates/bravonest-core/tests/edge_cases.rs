//! Edge case and boundary condition tests
//!
//! These tests verify the interaction layer handles unusual inputs,
//! failing platforms, and boundary values correctly.

use std::time::Duration;

use bravonest_core::config::ConfigOverrides;
use bravonest_core::route_scroll::target_for;
use bravonest_core::{
    mailto_url, CourseForm, EnquiryForm, NavRequest, Navigation, ProjectForm,
    RouteScrollCoordinator, ScrollMode, ScrollOutcome, ScrollSurface, ScrollTarget, SiteConfig,
    SiteError, SiteResult, Tick, Typewriter, TypewriterOptions,
};

// ============================================================================
// Test Doubles
// ============================================================================

/// Page with a fixed set of element ids that records every call
#[derive(Default)]
struct PageSurface {
    ids: Vec<&'static str>,
    fail_smooth: bool,
    calls: Vec<String>,
}

impl PageSurface {
    fn with_ids(ids: &[&'static str]) -> Self {
        Self {
            ids: ids.to_vec(),
            ..Default::default()
        }
    }
}

impl ScrollSurface for PageSurface {
    fn scroll_into_view(&mut self, id: &str, mode: ScrollMode) -> SiteResult<bool> {
        if self.fail_smooth && mode == ScrollMode::Smooth {
            return Err(SiteError::Scroll("smooth scrolling unsupported".into()));
        }
        let found = self.ids.contains(&id);
        if found {
            self.calls.push(format!("into-view:{}", id));
        }
        Ok(found)
    }

    fn focus_without_scroll(&mut self, id: &str) -> SiteResult<()> {
        self.calls.push(format!("focus:{}", id));
        Ok(())
    }

    fn scroll_to_top(&mut self, mode: ScrollMode) -> SiteResult<()> {
        if self.fail_smooth && mode == ScrollMode::Smooth {
            return Err(SiteError::Scroll("smooth scrolling unsupported".into()));
        }
        self.calls.push(format!("top:{:?}", mode));
        Ok(())
    }
}

// ============================================================================
// Route Scroll Tests
// ============================================================================

/// Following `/learn#register` lands on the registration section
#[test]
fn test_fragment_link_scrolls_and_focuses() {
    let mut surface = PageSurface::with_ids(&["register"]);
    let mut coordinator = RouteScrollCoordinator::new();

    let target = coordinator
        .on_navigate(Navigation::from_href("/learn#register", 1))
        .unwrap();
    let outcome = RouteScrollCoordinator::apply(&target, &mut surface);

    assert_eq!(outcome, ScrollOutcome::Element("register".into()));
    assert_eq!(surface.calls, vec!["into-view:register", "focus:register"]);
}

/// A plain route change goes to the top of the page
#[test]
fn test_plain_route_scrolls_to_top() {
    let mut surface = PageSurface::default();
    let mut coordinator = RouteScrollCoordinator::new();

    let target = coordinator
        .on_navigate(Navigation::from_href("/about", 1))
        .unwrap();

    assert_eq!(target, ScrollTarget::Top);
    assert_eq!(
        RouteScrollCoordinator::apply(&target, &mut surface),
        ScrollOutcome::Top
    );
    assert_eq!(surface.calls, vec!["top:Smooth"]);
}

/// Unknown anchors fall back to the top instead of doing nothing
#[test]
fn test_missing_fragment_element_scrolls_to_top() {
    let mut surface = PageSurface::with_ids(&["services"]);
    let target = target_for(&Navigation::from_href("/contact#nowhere", 1));

    let outcome = RouteScrollCoordinator::apply(&target, &mut surface);

    assert_eq!(outcome, ScrollOutcome::Top);
    assert_eq!(surface.calls, vec!["top:Smooth"]);
}

/// A broken smooth scroll still leaves the visitor at the top
#[test]
fn test_smooth_failure_falls_back_to_instant_top() {
    let mut surface = PageSurface::with_ids(&["register"]);
    surface.fail_smooth = true;

    let outcome = RouteScrollCoordinator::apply(
        &ScrollTarget::Element("register".into()),
        &mut surface,
    );

    assert_eq!(outcome, ScrollOutcome::FellBackToTop);
    assert_eq!(surface.calls, vec!["top:Instant"]);
}

/// Clicking the current link again scrolls again
#[test]
fn test_repeat_click_on_same_route_rescrolls() {
    let mut coordinator = RouteScrollCoordinator::new();
    let first = NavRequest::default().next("/contact", Some("project-call".into()));
    let second = first.next("/contact", Some("project-call".into()));

    assert!(coordinator.on_navigate(first.navigation_for("/contact")).is_some());
    assert!(coordinator.on_navigate(first.navigation_for("/contact")).is_none());
    assert_eq!(
        coordinator.on_navigate(second.navigation_for("/contact")),
        Some(ScrollTarget::Element("project-call".into()))
    );
}

/// History navigation to another page ignores the stale anchor
#[test]
fn test_stale_fragment_not_applied_to_other_route() {
    let request = NavRequest::default().next("/learn", Some("register".into()));
    let navigation = request.navigation_for("/about");

    assert_eq!(navigation.fragment, None);
    assert_eq!(target_for(&navigation), ScrollTarget::Top);
}

/// Percent-encoded and empty fragments
#[test]
fn test_fragment_decoding() {
    assert_eq!(
        Navigation::from_href("/learn#caf%C3%A9-menu", 0).fragment_id(),
        Some("café-menu".to_string())
    );
    assert_eq!(Navigation::from_href("/learn#", 0).fragment_id(), None);
    assert_eq!(Navigation::from_href("/learn", 0).fragment_id(), None);
}

// ============================================================================
// Typewriter Boundary Tests
// ============================================================================

/// Empty text never schedules a tick
#[test]
fn test_empty_typewriter_is_idle() {
    let mut tw = Typewriter::new("", TypewriterOptions::default().looping(true));

    assert!(tw.is_empty());
    assert_eq!(tw.next_delay(), None);
    assert_eq!(tw.advance(), Tick::Idle);
    assert_eq!(tw.revealed(), "");
}

/// Multibyte characters are revealed whole
#[test]
fn test_multibyte_reveal() {
    let mut tw = Typewriter::new("Ω✓é", TypewriterOptions::default());

    assert_eq!(tw.advance(), Tick::Typed);
    assert_eq!(tw.revealed(), "Ω");
    assert_eq!(tw.advance(), Tick::Typed);
    assert_eq!(tw.revealed(), "Ω✓");
    assert_eq!(tw.advance(), Tick::Completed);
    assert_eq!(tw.revealed(), "Ω✓é");
    assert_eq!(tw.advance(), Tick::Idle);
}

/// Segments of a split headline share one reveal
#[test]
fn test_revealed_segment_across_boundary() {
    let lead = "Where Ideas Become ";
    let mut tw = Typewriter::new(
        format!("{}Innovative", lead),
        TypewriterOptions::with_speed(Duration::from_millis(1)),
    );
    let lead_len = lead.chars().count();

    for _ in 0..lead_len + 3 {
        tw.advance();
    }

    assert_eq!(tw.revealed_segment(0, lead_len), lead);
    assert_eq!(tw.revealed_segment(lead_len, 10), "Inn");
}

/// Pausing stops scheduling until resumed
#[test]
fn test_paused_typewriter_holds_position() {
    let mut tw = Typewriter::new("abc", TypewriterOptions::default());
    tw.advance();
    tw.pause();

    assert_eq!(tw.next_delay(), None);
    assert_eq!(tw.advance(), Tick::Idle);
    assert_eq!(tw.revealed(), "a");

    tw.resume();
    assert!(tw.next_delay().is_some());
}

// ============================================================================
// Enquiry Validation Edge Cases
// ============================================================================

/// Whitespace-only fields count as empty
#[test]
fn test_whitespace_fields_are_missing() {
    let form = CourseForm {
        name: "   ".into(),
        email: "\t".into(),
        course: "embedded".into(),
        message: String::new(),
    };

    let errors = form.validate().unwrap_err();
    assert!(errors.message_for("name").is_some());
    assert!(errors.message_for("email").is_some());
    assert_eq!(errors.summary(), "Please fill in all required fields.");
}

/// Malformed addresses are rejected with the email message
#[test]
fn test_malformed_email_rejected() {
    for email in ["grace", "grace@", "grace@example", "gr ace@example.com", "@example.com"] {
        let form = ProjectForm {
            name: "Grace".into(),
            email: email.into(),
            project_type: "pcb".into(),
            description: "Two-layer board".into(),
            time_window: String::new(),
        };

        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.message_for("email"),
            Some("Please enter a valid email address."),
            "{email} should be rejected"
        );
        assert!(!errors.has_missing());
    }
}

/// Unknown select values are reported against their field
#[test]
fn test_unknown_project_type() {
    let form = ProjectForm {
        name: "Grace".into(),
        email: "grace@example.com".into(),
        project_type: "firmware".into(),
        description: "Bootloader".into(),
        time_window: String::new(),
    };

    let errors = form.validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors.message_for("project-type").is_some());
}

/// Values are trimmed and optional fields left blank become absent
#[test]
fn test_payload_trims_values() {
    let form = CourseForm {
        name: "  Ada Lovelace ".into(),
        email: " ada@example.com ".into(),
        course: "custom".into(),
        message: "   ".into(),
    };

    let payload = form.validate().unwrap();
    assert_eq!(payload.sender_name(), "Ada Lovelace");
    assert_eq!(payload.sender_email(), "ada@example.com");
    assert!(payload
        .body("Bravonest")
        .contains("No additional message provided"));
}

/// Unicode and reserved characters survive the mailto encoding
#[test]
fn test_mailto_encodes_reserved_characters() {
    let url = mailto_url("support@bravonest.lk", "Q&A? #1", "café = 100%");

    assert_eq!(
        url,
        "mailto:support@bravonest.lk?subject=Q%26A%3F%20%231&body=caf%C3%A9%20%3D%20100%25"
    );
}

// ============================================================================
// Configuration Edge Cases
// ============================================================================

/// An empty document yields the defaults, which validate
#[test]
fn test_empty_config_uses_defaults() {
    let config = SiteConfig::from_toml_str("").unwrap();

    assert_eq!(config, SiteConfig::default());
    assert!(config.configured_relays().is_empty());
}

/// Out-of-range tuning values are rejected
#[test]
fn test_invalid_effects_rejected() {
    for doc in [
        "[effects]\ntyping_speed_ms = 0",
        "[effects]\ncursor_ease = 0.0",
        "[effects]\ncursor_ease = 1.5",
        "[effects]\nreveal_threshold = 2.0",
        "[effects]\ntilt_scale = -1.0",
        "[contact]\nrecipient = \"not-an-address\"",
    ] {
        let err = SiteConfig::from_toml_str(doc).unwrap_err();
        assert!(matches!(err, SiteError::InvalidConfig(_)), "{doc}");
    }
}

/// Malformed TOML surfaces as a parse error
#[test]
fn test_malformed_config_is_parse_error() {
    let err = SiteConfig::from_toml_str("[contact\nrecipient =").unwrap_err();
    assert!(matches!(err, SiteError::ConfigParse(_)));
}

/// Blank override values do not clobber the file
#[test]
fn test_blank_overrides_ignored() {
    let overrides = ConfigOverrides::from_lookup(|name| match name {
        "BRAVONEST_FORMSUBMIT_ENDPOINT" => Some("   ".to_string()),
        "BRAVONEST_EMAILJS_SERVICE_ID" => Some("svc".to_string()),
        _ => None,
    });

    assert_eq!(overrides.formsubmit_endpoint, None);
    assert_eq!(overrides.emailjs_service_id.as_deref(), Some("svc"));

    // Partial EmailJS credentials leave the relay unconfigured
    let config = SiteConfig::default().with_overrides(overrides);
    assert!(config.configured_relays().is_empty());
}
