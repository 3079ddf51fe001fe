//! Site configuration.
//!
//! The site ships a `site.toml` that is embedded at build time. Relay
//! credentials may be layered on top from the build environment so they
//! never have to be committed.
//!
//! ```toml
//! [contact]
//! recipient = "support@bravonest.lk"
//!
//! [relay.formsubmit]
//! endpoint = "https://formsubmit.co/ajax/support@bravonest.lk"
//!
//! [effects]
//! typing_speed_ms = 38
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::enquiry::is_valid_email;
use crate::error::{SiteError, SiteResult};

/// Default EmailJS REST endpoint
pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Root of the site configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub effects: EffectsConfig,
}

/// Where enquiries end up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Mailbox that receives relay mail and mailto hand-offs
    pub recipient: String,
    /// Name used in message footers
    #[serde(default = "default_site_name")]
    pub site_name: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: "support@bravonest.lk".to_string(),
            site_name: default_site_name(),
        }
    }
}

fn default_site_name() -> String {
    "Bravonest".to_string()
}

/// Email relay providers, tried in declaration order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RelayConfig {
    #[serde(default)]
    pub formsubmit: Option<FormSubmitConfig>,
    #[serde(default)]
    pub emailjs: Option<EmailJsConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FormSubmitConfig {
    /// AJAX endpoint, e.g. `https://formsubmit.co/ajax/<recipient>`
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl FormSubmitConfig {
    /// Endpoint, if one is set and non-blank
    pub fn endpoint(&self) -> Option<&str> {
        non_blank(self.endpoint.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailJsConfig {
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub public_key: Option<String>,
    #[serde(default = "default_emailjs_endpoint")]
    pub endpoint: String,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            service_id: None,
            template_id: None,
            public_key: None,
            endpoint: default_emailjs_endpoint(),
        }
    }
}

fn default_emailjs_endpoint() -> String {
    EMAILJS_ENDPOINT.to_string()
}

/// Fully resolved EmailJS credentials
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailJsCredentials<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub public_key: &'a str,
    pub endpoint: &'a str,
}

impl EmailJsConfig {
    /// All credentials, or `None` when any of them is missing
    pub fn credentials(&self) -> Option<EmailJsCredentials<'_>> {
        Some(EmailJsCredentials {
            service_id: non_blank(self.service_id.as_deref())?,
            template_id: non_blank(self.template_id.as_deref())?,
            public_key: non_blank(self.public_key.as_deref())?,
            endpoint: non_blank(Some(self.endpoint.as_str()))?,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Tuning for the interaction layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Milliseconds per revealed character in the hero headline
    pub typing_speed_ms: u64,
    /// Exponential smoothing factor for the cursor outline, in (0, 1]
    pub cursor_ease: f64,
    /// Maximum card tilt in degrees
    pub tilt_max_deg: f64,
    /// Scale applied while a card is tilted
    pub tilt_scale: f64,
    /// Visible fraction that triggers a scroll reveal, in [0, 1]
    pub reveal_threshold: f64,
    /// Delay between a navigation and its scroll
    pub route_scroll_delay_ms: u64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            typing_speed_ms: 38,
            cursor_ease: crate::cursor::DEFAULT_EASE,
            tilt_max_deg: crate::tilt::DEFAULT_MAX_TILT_DEG,
            tilt_scale: crate::tilt::DEFAULT_SCALE,
            reveal_threshold: crate::reveal::DEFAULT_THRESHOLD,
            route_scroll_delay_ms: crate::route_scroll::SCROLL_DELAY.as_millis() as u64,
        }
    }
}

/// Values supplied by the build environment that win over the file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub formsubmit_endpoint: Option<String>,
    pub emailjs_service_id: Option<String>,
    pub emailjs_template_id: Option<String>,
    pub emailjs_public_key: Option<String>,
}

pub const ENV_FORMSUBMIT_ENDPOINT: &str = "BRAVONEST_FORMSUBMIT_ENDPOINT";
pub const ENV_EMAILJS_SERVICE_ID: &str = "BRAVONEST_EMAILJS_SERVICE_ID";
pub const ENV_EMAILJS_TEMPLATE_ID: &str = "BRAVONEST_EMAILJS_TEMPLATE_ID";
pub const ENV_EMAILJS_PUBLIC_KEY: &str = "BRAVONEST_EMAILJS_PUBLIC_KEY";

impl ConfigOverrides {
    /// Collect overrides through `lookup`, which maps a variable name to its
    /// value. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        Self {
            formsubmit_endpoint: get(ENV_FORMSUBMIT_ENDPOINT),
            emailjs_service_id: get(ENV_EMAILJS_SERVICE_ID),
            emailjs_template_id: get(ENV_EMAILJS_TEMPLATE_ID),
            emailjs_public_key: get(ENV_EMAILJS_PUBLIC_KEY),
        }
    }

    /// Overrides from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> SiteResult<Self> {
        let config: SiteConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> SiteResult<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&source)
    }

    /// Reject values the interaction layer cannot work with
    pub fn validate(&self) -> SiteResult<()> {
        if !is_valid_email(&self.contact.recipient) {
            return Err(SiteError::InvalidConfig(format!(
                "contact.recipient '{}' is not an email address",
                self.contact.recipient
            )));
        }

        let effects = &self.effects;
        if effects.typing_speed_ms == 0 {
            return Err(SiteError::InvalidConfig(
                "effects.typing_speed_ms must be positive".to_string(),
            ));
        }
        if !(effects.cursor_ease > 0.0 && effects.cursor_ease <= 1.0) {
            return Err(SiteError::InvalidConfig(format!(
                "effects.cursor_ease must be in (0, 1], got {}",
                effects.cursor_ease
            )));
        }
        if !(0.0..=1.0).contains(&effects.reveal_threshold) {
            return Err(SiteError::InvalidConfig(format!(
                "effects.reveal_threshold must be in [0, 1], got {}",
                effects.reveal_threshold
            )));
        }
        if !effects.tilt_max_deg.is_finite() || effects.tilt_max_deg < 0.0 {
            return Err(SiteError::InvalidConfig(format!(
                "effects.tilt_max_deg must be a non-negative angle, got {}",
                effects.tilt_max_deg
            )));
        }
        if !effects.tilt_scale.is_finite() || effects.tilt_scale <= 0.0 {
            return Err(SiteError::InvalidConfig(format!(
                "effects.tilt_scale must be positive, got {}",
                effects.tilt_scale
            )));
        }

        Ok(())
    }

    /// Layer build-time values over the parsed file
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(endpoint) = overrides.formsubmit_endpoint {
            self.relay
                .formsubmit
                .get_or_insert_with(FormSubmitConfig::default)
                .endpoint = Some(endpoint);
        }

        let has_emailjs = overrides.emailjs_service_id.is_some()
            || overrides.emailjs_template_id.is_some()
            || overrides.emailjs_public_key.is_some();
        if has_emailjs {
            let emailjs = self.relay.emailjs.get_or_insert_with(EmailJsConfig::default);
            if let Some(id) = overrides.emailjs_service_id {
                emailjs.service_id = Some(id);
            }
            if let Some(id) = overrides.emailjs_template_id {
                emailjs.template_id = Some(id);
            }
            if let Some(key) = overrides.emailjs_public_key {
                emailjs.public_key = Some(key);
            }
        }

        self
    }

    /// Names of relays that have everything they need to send
    pub fn configured_relays(&self) -> Vec<&'static str> {
        let mut relays = Vec::new();
        if self
            .relay
            .formsubmit
            .as_ref()
            .and_then(FormSubmitConfig::endpoint)
            .is_some()
        {
            relays.push(crate::dispatch::FORMSUBMIT);
        }
        if self
            .relay
            .emailjs
            .as_ref()
            .and_then(EmailJsConfig::credentials)
            .is_some()
        {
            relays.push(crate::dispatch::EMAILJS);
        }
        relays
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[contact]
recipient = "support@bravonest.lk"

[relay.formsubmit]
endpoint = "https://formsubmit.co/ajax/support@bravonest.lk"

[effects]
typing_speed_ms = 45
"#;

    #[test]
    fn parses_sample_and_fills_defaults() {
        let config = SiteConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.contact.site_name, "Bravonest");
        assert_eq!(config.effects.typing_speed_ms, 45);
        assert_eq!(config.effects.route_scroll_delay_ms, 40);
        assert!((config.effects.cursor_ease - 0.18).abs() < f64::EPSILON);
        assert_eq!(config.configured_relays(), vec!["formsubmit"]);
    }

    #[test]
    fn rejects_bad_recipient() {
        let err = SiteConfig::from_toml_str("[contact]\nrecipient = \"nobody\"\n").unwrap_err();
        assert!(matches!(err, SiteError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_out_of_range_effects() {
        let source = "[contact]\nrecipient = \"a@b.co\"\n[effects]\ncursor_ease = 1.5\n";
        assert!(SiteConfig::from_toml_str(source).is_err());

        let source = "[contact]\nrecipient = \"a@b.co\"\n[effects]\nreveal_threshold = -0.1\n";
        assert!(SiteConfig::from_toml_str(source).is_err());

        let source = "[contact]\nrecipient = \"a@b.co\"\n[effects]\ntyping_speed_ms = 0\n";
        assert!(SiteConfig::from_toml_str(source).is_err());
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = SiteConfig::from_toml_str("[contact\n").unwrap_err();
        assert!(matches!(err, SiteError::ConfigParse(_)));
    }

    #[test]
    fn blank_endpoint_counts_as_unconfigured() {
        let source = "[contact]\nrecipient = \"a@b.co\"\n[relay.formsubmit]\nendpoint = \"  \"\n";
        let config = SiteConfig::from_toml_str(source).unwrap();
        assert!(config.configured_relays().is_empty());
    }

    #[test]
    fn overrides_complete_emailjs() {
        let config = SiteConfig::default().with_overrides(ConfigOverrides {
            emailjs_service_id: Some("svc".into()),
            emailjs_template_id: Some("tpl".into()),
            emailjs_public_key: Some("key".into()),
            ..Default::default()
        });

        let creds = config.relay.emailjs.as_ref().and_then(EmailJsConfig::credentials).unwrap();
        assert_eq!(creds.service_id, "svc");
        assert_eq!(creds.endpoint, EMAILJS_ENDPOINT);
        assert_eq!(config.configured_relays(), vec!["emailjs"]);
    }

    #[test]
    fn partial_emailjs_is_unconfigured() {
        let config = SiteConfig::default().with_overrides(ConfigOverrides {
            emailjs_service_id: Some("svc".into()),
            ..Default::default()
        });
        assert!(config.configured_relays().is_empty());
    }
}
