//! `mailto:` hand-off, the last link of the chain.

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use tracing::info;

use super::{DeliveryStrategy, MAILTO};
use crate::enquiry::FormPayload;
use crate::error::{DispatchResult, SiteResult};

/// Opens a URL in the user's mail client
pub trait MailClient {
    fn open(&self, url: &str) -> SiteResult<()>;
}

/// `mailto:` URL with percent-encoded subject and body
pub fn mailto_url(recipient: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

pub struct MailtoFallback {
    recipient: String,
    site_name: String,
    client: Rc<dyn MailClient>,
}

impl MailtoFallback {
    pub fn new(
        recipient: impl Into<String>,
        site_name: impl Into<String>,
        client: Rc<dyn MailClient>,
    ) -> Self {
        Self {
            recipient: recipient.into(),
            site_name: site_name.into(),
            client,
        }
    }

    pub fn url_for(&self, payload: &FormPayload) -> String {
        mailto_url(
            &self.recipient,
            &payload.subject(),
            &payload.body(&self.site_name),
        )
    }
}

impl DeliveryStrategy for MailtoFallback {
    fn name(&self) -> &'static str {
        MAILTO
    }

    fn is_configured(&self) -> bool {
        true
    }

    fn is_hand_off(&self) -> bool {
        true
    }

    fn deliver<'a>(&'a self, payload: &'a FormPayload) -> LocalBoxFuture<'a, DispatchResult<()>> {
        async move {
            let url = self.url_for(payload);
            info!(intent = %payload.intent(), "Handing enquiry to the mail client");
            self.client.open(&url)?;
            Ok(())
        }
        .boxed_local()
    }
}
