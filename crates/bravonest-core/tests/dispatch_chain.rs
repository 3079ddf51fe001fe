//! Email dispatch chain tests
//!
//! Drive the full FormSubmit -> EmailJS -> mailto chain against a scripted
//! transport and a mail client that counts hand-offs.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use bravonest_core::config::{EmailJsConfig, FormSubmitConfig};
use bravonest_core::dispatch::{RelayBody, RelayRequest, RelayResponse, FORMSUBMIT, MAILTO};
use bravonest_core::{
    DispatchError, DispatchOutcome, DispatchResult, EmailDispatcher, EnquiryForm, MailClient, ProjectForm,
    RelayTransport, SiteConfig, SiteError, SiteResult, SubmitError,
};
use futures::future::LocalBoxFuture;
use futures::FutureExt;

// ============================================================================
// Test Doubles
// ============================================================================

/// Transport that replays scripted results and records every request
#[derive(Default)]
struct ScriptedTransport {
    replies: RefCell<VecDeque<DispatchResult<RelayResponse>>>,
    requests: RefCell<Vec<RelayRequest>>,
}

impl ScriptedTransport {
    fn replying(replies: Vec<DispatchResult<RelayResponse>>) -> Rc<Self> {
        Rc::new(Self {
            replies: RefCell::new(replies.into()),
            requests: RefCell::default(),
        })
    }

    fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl RelayTransport for ScriptedTransport {
    fn post<'a>(&'a self, request: RelayRequest) -> LocalBoxFuture<'a, DispatchResult<RelayResponse>> {
        self.requests.borrow_mut().push(request);
        let reply = self
            .replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(DispatchError::Transport("connection refused".into())));
        async move { reply }.boxed_local()
    }
}

#[derive(Default)]
struct CountingMailClient {
    opened: RefCell<Vec<String>>,
    fail: Cell<bool>,
}

impl CountingMailClient {
    fn opens(&self) -> usize {
        self.opened.borrow().len()
    }
}

impl MailClient for CountingMailClient {
    fn open(&self, url: &str) -> SiteResult<()> {
        if self.fail.get() {
            return Err(SiteError::MailClient("no window".into()));
        }
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn ok_json(body: &str) -> DispatchResult<RelayResponse> {
    Ok(RelayResponse {
        status: 200,
        body: body.to_string(),
    })
}

fn config_with_formsubmit() -> SiteConfig {
    let mut config = SiteConfig::default();
    config.relay.formsubmit = Some(FormSubmitConfig {
        endpoint: Some("https://formsubmit.co/ajax/support@bravonest.lk".into()),
    });
    config
}

fn project_form() -> ProjectForm {
    ProjectForm {
        name: "Grace Hopper".into(),
        email: "grace@example.com".into(),
        project_type: "software".into(),
        description: "Internal dashboard".into(),
        time_window: "Tuesday afternoons".into(),
    }
}

fn dispatcher(
    config: &SiteConfig,
    transport: &Rc<ScriptedTransport>,
    client: &Rc<CountingMailClient>,
) -> EmailDispatcher {
    EmailDispatcher::from_config(config, transport.clone(), client.clone())
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_relay_success_does_not_open_mail_client() {
    let _ = tracing_subscriber::fmt::try_init();
    let transport = ScriptedTransport::replying(vec![ok_json(r#"{"success":"true"}"#)]);
    let client = Rc::new(CountingMailClient::default());
    let dispatcher = dispatcher(&config_with_formsubmit(), &transport, &client);

    let outcome = dispatcher.submit(&project_form()).await.unwrap();

    assert_eq!(outcome, DispatchOutcome::Delivered { provider: FORMSUBMIT });
    assert_eq!(client.opens(), 0);
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn test_formsubmit_request_fields() {
    let _ = tracing_subscriber::fmt::try_init();
    let transport = ScriptedTransport::replying(vec![ok_json(r#"{"success":true}"#)]);
    let client = Rc::new(CountingMailClient::default());
    let dispatcher = dispatcher(&config_with_formsubmit(), &transport, &client);

    dispatcher.submit(&project_form()).await.unwrap();

    let requests = transport.requests.borrow();
    assert_eq!(requests[0].url, "https://formsubmit.co/ajax/support@bravonest.lk");
    let RelayBody::Form(pairs) = &requests[0].body else {
        panic!("expected a form body");
    };
    let field = |name: &str| {
        pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or_default()
    };
    assert_eq!(field("email"), "support@bravonest.lk");
    assert_eq!(field("name"), "Grace Hopper");
    assert_eq!(field("subject"), "Project Call Request - Software Only");
    assert_eq!(field("_replyto"), "grace@example.com");
    assert_eq!(field("_captcha"), "false");
    assert!(field("message").contains("Preferred Time Window: Tuesday afternoons"));
}

#[tokio::test]
async fn test_network_failure_opens_mailto_exactly_once() {
    let _ = tracing_subscriber::fmt::try_init();
    let transport = ScriptedTransport::replying(vec![Err(DispatchError::Transport(
        "offline".into(),
    ))]);
    let client = Rc::new(CountingMailClient::default());
    let dispatcher = dispatcher(&config_with_formsubmit(), &transport, &client);

    let outcome = dispatcher.submit(&project_form()).await.unwrap();

    assert_eq!(outcome, DispatchOutcome::HandedOff { provider: MAILTO });
    assert_eq!(client.opens(), 1);

    let url = client.opened.borrow()[0].clone();
    assert!(url.starts_with("mailto:support@bravonest.lk?subject="));
    assert!(url.contains("Project%20Call%20Request%20-%20Software%20Only"));
    assert!(url.contains("Grace%20Hopper"));
    assert!(url.contains("Internal%20dashboard"));
}

#[tokio::test]
async fn test_http_error_and_rejection_fall_back() {
    let _ = tracing_subscriber::fmt::try_init();
    for reply in [
        Ok(RelayResponse {
            status: 500,
            body: "oops".into(),
        }),
        ok_json(r#"{"success":"false","message":"not activated"}"#),
    ] {
        let transport = ScriptedTransport::replying(vec![reply]);
        let client = Rc::new(CountingMailClient::default());
        let dispatcher = dispatcher(&config_with_formsubmit(), &transport, &client);

        let outcome = dispatcher.submit(&project_form()).await.unwrap();
        assert!(!outcome.is_delivered());
        assert_eq!(client.opens(), 1);
    }
}

#[tokio::test]
async fn test_unconfigured_relays_go_straight_to_mailto() {
    let _ = tracing_subscriber::fmt::try_init();
    let transport = ScriptedTransport::replying(vec![]);
    let client = Rc::new(CountingMailClient::default());
    let dispatcher = dispatcher(&SiteConfig::default(), &transport, &client);

    let outcome = dispatcher.submit(&project_form()).await.unwrap();

    assert_eq!(outcome.provider(), MAILTO);
    assert_eq!(transport.request_count(), 0);
    assert_eq!(client.opens(), 1);
}

#[tokio::test]
async fn test_emailjs_is_second_in_line() {
    let _ = tracing_subscriber::fmt::try_init();
    let mut config = config_with_formsubmit();
    config.relay.emailjs = Some(EmailJsConfig {
        service_id: Some("svc".into()),
        template_id: Some("tpl".into()),
        public_key: Some("pk".into()),
        ..Default::default()
    });
    let transport = ScriptedTransport::replying(vec![
        Err(DispatchError::Transport("timeout".into())),
        Ok(RelayResponse {
            status: 200,
            body: "OK".into(),
        }),
    ]);
    let client = Rc::new(CountingMailClient::default());
    let dispatcher = dispatcher(&config, &transport, &client);
    assert_eq!(dispatcher.chain(), vec!["formsubmit", "emailjs", "mailto"]);

    let outcome = dispatcher.submit(&project_form()).await.unwrap();

    assert_eq!(outcome, DispatchOutcome::Delivered { provider: "emailjs" });
    assert_eq!(client.opens(), 0);
    let requests = transport.requests.borrow();
    let RelayBody::Json(body) = &requests[1].body else {
        panic!("expected a json body");
    };
    assert_eq!(body["user_id"], "pk");
    assert_eq!(body["template_params"]["reply_to"], "grace@example.com");
}

#[tokio::test]
async fn test_empty_required_field_never_dispatches() {
    let _ = tracing_subscriber::fmt::try_init();
    let transport = ScriptedTransport::replying(vec![ok_json(r#"{"success":true}"#)]);
    let client = Rc::new(CountingMailClient::default());
    let dispatcher = dispatcher(&config_with_formsubmit(), &transport, &client);

    let mut form = project_form();
    form.description.clear();

    match dispatcher.submit(&form).await {
        Err(SubmitError::Invalid(errors)) => {
            assert_eq!(errors.message_for("description"), Some("Description is required."));
        }
        other => panic!("expected validation failure, got {:?}", other),
    }
    assert_eq!(transport.request_count(), 0);
    assert_eq!(client.opens(), 0);
}

#[tokio::test]
async fn test_failed_hand_off_exhausts_chain() {
    let _ = tracing_subscriber::fmt::try_init();
    let transport = ScriptedTransport::replying(vec![]);
    let client = Rc::new(CountingMailClient::default());
    client.fail.set(true);
    let dispatcher = dispatcher(&SiteConfig::default(), &transport, &client);

    match dispatcher.submit(&project_form()).await {
        Err(SubmitError::Dispatch(DispatchError::Exhausted(reason))) => {
            assert!(reason.contains("no window"));
        }
        other => panic!("expected exhausted chain, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_dispatcher_reports_exhausted() {
    let _ = tracing_subscriber::fmt::try_init();
    let dispatcher = EmailDispatcher::new();
    let payload = project_form().validate().unwrap();
    let err = dispatcher.dispatch(&payload).await.unwrap_err();
    assert!(err.to_string().contains("no delivery strategy configured"));
}
