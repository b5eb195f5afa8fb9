use crate::error::{LinksError, Result};
use log::debug;

/// Open a URL with the system's default handler
pub fn open_url(url: &str) -> Result<()> {
    debug!("Opening {} with the default handler", url);
    open::that(url).map_err(|e| LinksError::Browser(format!("failed to open {}: {}", url, e)))
}

/// Open a URL with a specific application
pub fn open_url_with(url: &str, browser: &str) -> Result<()> {
    debug!("Opening {} with {}", url, browser);
    open::with(url, browser)
        .map_err(|e| LinksError::Browser(format!("failed to open {} with {}: {}", url, browser, e)))
}

/// Anything that can launch a bookmark's URL
pub trait UrlOpener {
    fn open(&self, url: &str) -> Result<()>;
}

/// Opens URLs on the local desktop, optionally through a configured browser
#[derive(Debug, Clone, Default)]
pub struct SystemOpener {
    pub browser: Option<String>,
}

impl SystemOpener {
    pub fn new(browser: Option<String>) -> Self {
        Self { browser }
    }
}

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        match self.browser.as_deref() {
            Some(browser) if !browser.trim().is_empty() => open_url_with(url, browser),
            _ => open_url(url),
        }
    }
}
