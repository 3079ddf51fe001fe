use bravonest_core::{MailClient, SiteError, SiteResult};

/// Opens `mailto:` links by navigating the current window
#[derive(Debug, Default)]
pub struct BrowserMailClient;

impl MailClient for BrowserMailClient {
    fn open(&self, url: &str) -> SiteResult<()> {
        let window =
            web_sys::window().ok_or_else(|| SiteError::MailClient("no window".to_string()))?;
        window
            .location()
            .set_href(url)
            .map_err(|e| SiteError::MailClient(format!("{:?}", e)))
    }
}
