//! EmailJS REST relay.

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use serde_json::json;

use super::transport::{RelayBody, RelayRequest, RelayTransport};
use super::{DeliveryStrategy, EMAILJS};
use crate::config::EmailJsConfig;
use crate::enquiry::FormPayload;
use crate::error::{DispatchError, DispatchResult};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Credentials {
    service_id: String,
    template_id: String,
    public_key: String,
    endpoint: String,
}

pub struct EmailJsRelay {
    credentials: Option<Credentials>,
    recipient: String,
    site_name: String,
    transport: Rc<dyn RelayTransport>,
}

impl EmailJsRelay {
    pub fn new(
        config: Option<&EmailJsConfig>,
        recipient: impl Into<String>,
        site_name: impl Into<String>,
        transport: Rc<dyn RelayTransport>,
    ) -> Self {
        let credentials = config
            .and_then(EmailJsConfig::credentials)
            .map(|c| Credentials {
                service_id: c.service_id.to_string(),
                template_id: c.template_id.to_string(),
                public_key: c.public_key.to_string(),
                endpoint: c.endpoint.to_string(),
            });
        Self {
            credentials,
            recipient: recipient.into(),
            site_name: site_name.into(),
            transport,
        }
    }

    fn request(&self, credentials: &Credentials, payload: &FormPayload) -> RelayRequest {
        RelayRequest {
            url: credentials.endpoint.clone(),
            body: RelayBody::Json(json!({
                "service_id": credentials.service_id,
                "template_id": credentials.template_id,
                "user_id": credentials.public_key,
                "template_params": {
                    "to_email": self.recipient,
                    "from_name": payload.sender_name(),
                    "reply_to": payload.sender_email(),
                    "intent": payload.intent().to_string(),
                    "subject": payload.subject(),
                    "message": payload.body(&self.site_name),
                },
            })),
        }
    }
}

impl DeliveryStrategy for EmailJsRelay {
    fn name(&self) -> &'static str {
        EMAILJS
    }

    fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    fn deliver<'a>(&'a self, payload: &'a FormPayload) -> LocalBoxFuture<'a, DispatchResult<()>> {
        async move {
            let credentials = self
                .credentials
                .as_ref()
                .ok_or(DispatchError::NotConfigured(EMAILJS))?;
            let response = self
                .transport
                .post(self.request(credentials, payload))
                .await?;
            if response.is_success() {
                Ok(())
            } else {
                Err(DispatchError::Status {
                    status: response.status,
                    body: response.body,
                })
            }
        }
        .boxed_local()
    }
}
