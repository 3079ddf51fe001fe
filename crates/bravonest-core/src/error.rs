//! Error types for the Bravonest site

use thiserror::Error;

use crate::enquiry::ValidationErrors;

/// Main error type for site-level operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// Site configuration could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Site configuration parsed but holds unusable values
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Client-side preference storage was unavailable or rejected access
    #[error("Storage access error: {0}")]
    Storage(String),

    /// The scroll surface could not perform a scroll or focus request
    #[error("Scroll error: {0}")]
    Scroll(String),

    /// The mail client hand-off (mailto navigation) failed
    #[error("Mail client error: {0}")]
    MailClient(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;

/// Errors raised while delivering an enquiry through a provider
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The provider has no endpoint or credentials configured
    #[error("Provider '{0}' is not configured")]
    NotConfigured(&'static str),

    /// The request never produced a response
    #[error("Transport error: {0}")]
    Transport(String),

    /// The relay answered with a non-success HTTP status
    #[error("Relay returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The relay answered 2xx but reported failure in its payload
    #[error("Relay rejected message: {0}")]
    Rejected(String),

    /// The relay response could not be decoded
    #[error("Malformed relay response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Handing the message to the local mail client failed
    #[error("Mail client hand-off failed: {0}")]
    HandOff(#[from] SiteError),

    /// Every strategy in the chain failed
    #[error("All delivery strategies failed (last: {0})")]
    Exhausted(String),
}

impl From<reqwest::Error> for DispatchError {
    fn from(err: reqwest::Error) -> Self {
        DispatchError::Transport(err.to_string())
    }
}

/// Result type alias using DispatchError
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Why a form submission did not go out
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The form failed validation and never reached a provider
    #[error("Invalid enquiry: {0}")]
    Invalid(ValidationErrors),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::InvalidConfig("recipient is empty".to_string());
        assert_eq!(format!("{}", err), "Invalid config: recipient is empty");

        let err = DispatchError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(format!("{}", err), "Relay returned HTTP 502: bad gateway");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let site_err: SiteError = io_err.into();
        assert!(matches!(site_err, SiteError::Io(_)));
    }

    #[test]
    fn test_submit_error_display() {
        let err: SubmitError = DispatchError::NotConfigured("emailjs").into();
        assert!(matches!(err, SubmitError::Dispatch(_)));
        assert_eq!(err.to_string(), "Provider 'emailjs' is not configured");

        let err = SubmitError::Invalid(ValidationErrors::default());
        assert!(err.to_string().starts_with("Invalid enquiry:"));
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_hand_off_wraps_site_error() {
        let err: DispatchError = SiteError::MailClient("no window".to_string()).into();
        assert!(matches!(err, DispatchError::HandOff(_)));
        assert!(err.to_string().contains("no window"));
    }
}
