//! Enquiry delivery.
//!
//! An [`EmailDispatcher`] holds an ordered list of [`DeliveryStrategy`]s and
//! tries them in turn until one succeeds. Unconfigured relays are skipped.
//! The chain built from a [`SiteConfig`] always ends in the `mailto:`
//! hand-off, so a visitor can send their message even when no relay is set up
//! or every relay fails.
//!
//! ```text
//! formsubmit ──fail──▶ emailjs ──fail──▶ mailto (always succeeds once opened)
//! ```

mod emailjs;
mod formsubmit;
mod mailto;
mod transport;

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use tracing::{debug, info, warn};

pub use emailjs::EmailJsRelay;
pub use formsubmit::FormSubmitRelay;
pub use mailto::{mailto_url, MailClient, MailtoFallback};
pub use transport::{HttpTransport, RelayBody, RelayRequest, RelayResponse, RelayTransport};

use crate::config::SiteConfig;
use crate::enquiry::{EnquiryForm, FormPayload};
use crate::error::{DispatchError, DispatchResult};
pub use crate::error::SubmitError;

pub const FORMSUBMIT: &str = "formsubmit";
pub const EMAILJS: &str = "emailjs";
pub const MAILTO: &str = "mailto";

/// One way of getting an enquiry to the business
pub trait DeliveryStrategy {
    /// Stable identifier used in logs
    fn name(&self) -> &'static str;

    /// Whether the strategy has what it needs to attempt delivery
    fn is_configured(&self) -> bool;

    /// True for strategies that hand the message to the visitor's own
    /// client instead of delivering it
    fn is_hand_off(&self) -> bool {
        false
    }

    fn deliver<'a>(&'a self, payload: &'a FormPayload) -> LocalBoxFuture<'a, DispatchResult<()>>;
}

/// How an enquiry left the site
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A relay accepted the message
    Delivered { provider: &'static str },
    /// The visitor's mail client was opened with the message pre-filled
    HandedOff { provider: &'static str },
}

impl DispatchOutcome {
    pub fn provider(&self) -> &'static str {
        match self {
            DispatchOutcome::Delivered { provider } | DispatchOutcome::HandedOff { provider } => {
                provider
            }
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, DispatchOutcome::Delivered { .. })
    }
}

#[derive(Default)]
pub struct EmailDispatcher {
    strategies: Vec<Box<dyn DeliveryStrategy>>,
}

impl EmailDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a strategy to the end of the chain
    pub fn with_strategy(mut self, strategy: impl DeliveryStrategy + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Standard chain: FormSubmit, EmailJS, then the mailto hand-off
    pub fn from_config(
        config: &SiteConfig,
        transport: Rc<dyn RelayTransport>,
        mail_client: Rc<dyn MailClient>,
    ) -> Self {
        let recipient = config.contact.recipient.clone();
        let site_name = config.contact.site_name.clone();
        let formsubmit_endpoint = config
            .relay
            .formsubmit
            .as_ref()
            .and_then(|f| f.endpoint())
            .map(str::to_string);

        Self::new()
            .with_strategy(FormSubmitRelay::new(
                formsubmit_endpoint,
                recipient.clone(),
                site_name.clone(),
                transport.clone(),
            ))
            .with_strategy(EmailJsRelay::new(
                config.relay.emailjs.as_ref(),
                recipient.clone(),
                site_name.clone(),
                transport,
            ))
            .with_strategy(MailtoFallback::new(recipient, site_name, mail_client))
    }

    /// Strategy names in the order they are tried
    pub fn chain(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Try each configured strategy in order, stopping at the first success
    pub async fn dispatch(&self, payload: &FormPayload) -> DispatchResult<DispatchOutcome> {
        let mut last_error: Option<DispatchError> = None;

        for strategy in &self.strategies {
            let provider = strategy.name();
            if !strategy.is_configured() {
                debug!(provider, "Skipping unconfigured provider");
                continue;
            }

            info!(provider, intent = %payload.intent(), "Sending enquiry");
            match strategy.deliver(payload).await {
                Ok(()) if strategy.is_hand_off() => {
                    return Ok(DispatchOutcome::HandedOff { provider })
                }
                Ok(()) => return Ok(DispatchOutcome::Delivered { provider }),
                Err(e) => {
                    warn!(provider, "Delivery failed: {}", e);
                    last_error = Some(e);
                }
            }
        }

        let reason = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no delivery strategy configured".to_string());
        Err(DispatchError::Exhausted(reason))
    }

    /// Validate `form` and dispatch it. Invalid forms never reach a provider.
    pub async fn submit(&self, form: &dyn EnquiryForm) -> Result<DispatchOutcome, SubmitError> {
        let payload = form.validate().map_err(SubmitError::Invalid)?;
        self.dispatch(&payload).await.map_err(SubmitError::Dispatch)
    }
}
