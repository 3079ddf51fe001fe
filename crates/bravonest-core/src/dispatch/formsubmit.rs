//! FormSubmit AJAX relay.
//!
//! Posts form-encoded fields and expects `{"success": ...}` back.

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use serde_json::Value;

use super::transport::{RelayBody, RelayRequest, RelayTransport};
use super::{DeliveryStrategy, FORMSUBMIT};
use crate::enquiry::FormPayload;
use crate::error::{DispatchError, DispatchResult};

pub struct FormSubmitRelay {
    endpoint: Option<String>,
    recipient: String,
    site_name: String,
    transport: Rc<dyn RelayTransport>,
}

impl FormSubmitRelay {
    pub fn new(
        endpoint: Option<String>,
        recipient: impl Into<String>,
        site_name: impl Into<String>,
        transport: Rc<dyn RelayTransport>,
    ) -> Self {
        Self {
            endpoint: endpoint.filter(|e| !e.trim().is_empty()),
            recipient: recipient.into(),
            site_name: site_name.into(),
            transport,
        }
    }

    /// Request this relay would send for `payload`
    pub fn request(&self, endpoint: &str, payload: &FormPayload) -> RelayRequest {
        let fields = [
            ("email", self.recipient.clone()),
            ("name", payload.sender_name().to_string()),
            ("subject", payload.subject()),
            ("message", payload.body(&self.site_name)),
            ("_replyto", payload.sender_email().to_string()),
            ("_captcha", "false".to_string()),
            ("_template", "table".to_string()),
            ("_format", "plain".to_string()),
        ];
        RelayRequest {
            url: endpoint.to_string(),
            body: RelayBody::Form(
                fields
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v))
                    .collect(),
            ),
        }
    }
}

/// JavaScript-style truthiness of the `success` field
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty() && !s.eq_ignore_ascii_case("false"),
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::Null => false,
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub(crate) fn interpret(body: &str) -> DispatchResult<()> {
    let value: Value = serde_json::from_str(body)?;
    if value.get("success").is_some_and(is_truthy) {
        return Ok(());
    }
    let message = value
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("Failed to send email");
    Err(DispatchError::Rejected(message.to_string()))
}

impl DeliveryStrategy for FormSubmitRelay {
    fn name(&self) -> &'static str {
        FORMSUBMIT
    }

    fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    fn deliver<'a>(&'a self, payload: &'a FormPayload) -> LocalBoxFuture<'a, DispatchResult<()>> {
        async move {
            let endpoint = self
                .endpoint
                .as_deref()
                .ok_or(DispatchError::NotConfigured(FORMSUBMIT))?;
            let response = self.transport.post(self.request(endpoint, payload)).await?;
            if !response.is_success() {
                return Err(DispatchError::Status {
                    status: response.status,
                    body: response.body,
                });
            }
            interpret(&response.body)
        }
        .boxed_local()
    }
}
