// fetcher.rs
use crate::config::ScoutConfig;
use crate::domain::ListingReference;
use crate::scraper::ScraperError;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use tracing::{debug, warn};

/// Turns a listing reference into raw page text.
pub trait PageFetcher: Send + Sync {
    fn fetch(&self, reference: &ListingReference) -> Result<String, ScraperError>;
}

impl<F> PageFetcher for F
where
    F: Fn(&ListingReference) -> Result<String, ScraperError> + Send + Sync,
{
    fn fetch(&self, reference: &ListingReference) -> Result<String, ScraperError> {
        self(reference)
    }
}

/// Best-effort "show this page to the user". Never fails.
pub trait Viewer: Send + Sync {
    fn open(&self, url: &str);
}

pub struct NoopViewer;

impl Viewer for NoopViewer {
    fn open(&self, _url: &str) {}
}

pub struct BrowserViewer;

impl Viewer for BrowserViewer {
    fn open(&self, url: &str) {
        // open::that_detached returns as soon as the browser is spawned
        if let Err(e) = open::that_detached(url) {
            warn!("Could not open {url} in browser: {e}");
        }
    }
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &ScoutConfig) -> Result<Self, ScraperError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("de-DE,de;q=0.9"));

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ScraperError::Config(format!("HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, reference: &ListingReference) -> Result<String, ScraperError> {
        let failed = |reason: String| ScraperError::FetchFailed {
            url: reference.url.clone(),
            reason,
        };

        let resp = self
            .client
            .get(&reference.url)
            .send()
            .map_err(|e| failed(e.to_string()))?;

        let status = resp.status();
        debug!("GET {} -> {}", reference.url, status);

        if !status.is_success() {
            return Err(failed(format!("HTTP {status}")));
        }

        resp.text().map_err(|e| failed(e.to_string()))
    }
}
