pub mod config;
pub mod domain;
pub mod scraper;

#[cfg(test)]
mod tests;

pub use config::ScoutConfig;
pub use domain::{ListingRecord, ListingReference};
pub use scraper::{ImmoScout24, ListingInput, ScraperError};
