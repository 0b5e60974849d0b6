// scraper.rs
use crate::config::ScoutConfig;
use crate::domain::{ListingRecord, ListingReference};
use crate::scraper::extractor::{extract_references, ListingInput};
use crate::scraper::fetcher::{BrowserViewer, HttpFetcher, NoopViewer, PageFetcher, Viewer};
use crate::scraper::models::{ExposePage, PageStatus};
use crate::scraper::ScraperError;
use tracing::{debug, info};

/// Address lookup for ImmoScout24 exposés.
///
/// Built from raw input; `urls()` holds the deduplicated listings and
/// `parse` turns one of them into a [`ListingRecord`].
pub struct ImmoScout24 {
    urls: Vec<ListingReference>,
    fetcher: Box<dyn PageFetcher>,
    viewer: Box<dyn Viewer>,
}

impl ImmoScout24 {
    /// Production setup: HTTP fetch, browser viewer when `config.open_browser`.
    pub fn new(input: impl Into<ListingInput>, config: ScoutConfig) -> Result<Self, ScraperError> {
        let fetcher = HttpFetcher::new(&config)?;
        let viewer: Box<dyn Viewer> = if config.open_browser {
            Box::new(BrowserViewer)
        } else {
            Box::new(NoopViewer)
        };

        Ok(Self::with_capabilities(
            input,
            &config,
            Box::new(fetcher),
            viewer,
        ))
    }

    pub fn with_capabilities(
        input: impl Into<ListingInput>,
        config: &ScoutConfig,
        fetcher: Box<dyn PageFetcher>,
        viewer: Box<dyn Viewer>,
    ) -> Self {
        let urls = extract_references(&input.into(), &config.base_url);
        Self {
            urls,
            fetcher,
            viewer,
        }
    }

    pub fn urls(&self) -> &[ListingReference] {
        &self.urls
    }

    pub fn parse(&self, reference: &ListingReference) -> Result<ListingRecord, ScraperError> {
        self.viewer.open(&reference.url);

        let html = self.fetcher.fetch(reference)?;
        let page = ExposePage::parse(&html);

        match page.classify()? {
            PageStatus::NotFound => {
                info!("Listing {} not found", reference.id);
                Ok(ListingRecord::not_found())
            }
            PageStatus::Found(fields) => {
                debug!("Listing {} address fields: {:?}", reference.id, fields);
                let full_address =
                    fields
                        .full_address()
                        .ok_or_else(|| ScraperError::AddressFieldsMissing {
                            id: reference.id.clone(),
                        })?;

                info!("Listing {} at {}", reference.id, full_address);
                Ok(ListingRecord::found(full_address))
            }
        }
    }

    /// Parses every extracted listing in order. One failure does not stop the rest.
    pub fn parse_all(&self) -> Vec<(ListingReference, Result<ListingRecord, ScraperError>)> {
        self.urls
            .iter()
            .map(|reference| (reference.clone(), self.parse(reference)))
            .collect()
    }
}
