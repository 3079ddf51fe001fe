//! Site configuration for the web build.
//!
//! `site.toml` is embedded at compile time and relay secrets come from
//! `BRAVONEST_*` variables in the build environment. A file that fails to
//! parse or validate is logged and replaced by the defaults, so the site
//! always renders and enquiries still reach the mailto hand-off.

use std::sync::OnceLock;

use bravonest_core::config::{
    ConfigOverrides, ENV_EMAILJS_PUBLIC_KEY, ENV_EMAILJS_SERVICE_ID, ENV_EMAILJS_TEMPLATE_ID,
    ENV_FORMSUBMIT_ENDPOINT,
};
use bravonest_core::SiteConfig;

const SITE_TOML: &str = include_str!("../site.toml");

static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Parsed configuration, built on first use
pub fn site_config() -> &'static SiteConfig {
    SITE_CONFIG.get_or_init(|| load(SITE_TOML).with_overrides(build_overrides()))
}

fn load(source: &str) -> SiteConfig {
    match SiteConfig::from_toml_str(source) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Embedded site.toml rejected, using defaults: {}", e);
            SiteConfig::default()
        }
    }
}

fn build_overrides() -> ConfigOverrides {
    ConfigOverrides::from_lookup(|name| {
        let value = match name {
            ENV_FORMSUBMIT_ENDPOINT => option_env!("BRAVONEST_FORMSUBMIT_ENDPOINT"),
            ENV_EMAILJS_SERVICE_ID => option_env!("BRAVONEST_EMAILJS_SERVICE_ID"),
            ENV_EMAILJS_TEMPLATE_ID => option_env!("BRAVONEST_EMAILJS_TEMPLATE_ID"),
            ENV_EMAILJS_PUBLIC_KEY => option_env!("BRAVONEST_EMAILJS_PUBLIC_KEY"),
            _ => None,
        };
        value.map(str::to_string)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_file_is_valid() {
        let config = SiteConfig::from_toml_str(SITE_TOML).unwrap();
        assert_eq!(config.contact.recipient, "support@bravonest.lk");
        assert_eq!(config.effects.typing_speed_ms, 38);
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        assert_eq!(load("[effects]\ncursor_ease = 7.0"), SiteConfig::default());
    }
}
