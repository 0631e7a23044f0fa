use thiserror::Error;
use tracing::{debug, error};

use crate::domain::entities::is_web_url;

/// Why a detail link was not opened.
#[allow(missing_docs)]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BrowserError {
    #[error("refusing to open non-web link: {0}")]
    UnsupportedUrl(String),
}

/// Opens movie detail pages in the system browser.
#[derive(Clone, Default)]
pub struct BrowserService {}

impl BrowserService {
    #[allow(missing_docs)]
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    /// Launches the browser in the background.
    ///
    /// # Errors
    /// Returns `BrowserError` if `url` is not an http(s) link; launch failures
    /// are only logged.
    pub fn open(&self, url: &str) -> Result<(), BrowserError> {
        let url = Self::validate(url)?;

        debug!(url = %url, "Opening detail page");
        tokio::task::spawn_blocking(move || {
            if let Err(e) = opener::open_browser(&url) {
                error!("Failed to open browser for {}: {}", url, e);
            }
        });

        Ok(())
    }

    fn validate(url: &str) -> Result<String, BrowserError> {
        let trimmed = url.trim();
        if is_web_url(trimmed) {
            Ok(trimmed.to_string())
        } else {
            Err(BrowserError::UnsupportedUrl(trimmed.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_web_links() {
        assert_eq!(
            BrowserService::validate(" https://letterboxd.com/film/ran/ ").unwrap(),
            "https://letterboxd.com/film/ran/"
        );
        assert!(BrowserService::validate("HTTP://example.com").is_ok());
    }

    #[test]
    fn test_open_rejects_other_schemes() {
        let service = BrowserService::new();
        assert_eq!(
            service.open("file:///etc/passwd"),
            Err(BrowserError::UnsupportedUrl("file:///etc/passwd".to_string()))
        );
        assert!(service.open("").is_err());
    }

    #[test]
    fn test_validate_rejects_bare_scheme() {
        assert_eq!(
            BrowserService::validate("https://"),
            Err(BrowserError::UnsupportedUrl("https://".to_string()))
        );
    }
}
