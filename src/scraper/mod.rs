pub mod extractor;
pub mod fetcher;
pub mod models;
mod scraper;
mod scraper_error;

pub use extractor::{extract_references, ListingInput};
pub use fetcher::{BrowserViewer, HttpFetcher, NoopViewer, PageFetcher, Viewer};
pub use scraper::ImmoScout24;
pub use scraper_error::ScraperError;
