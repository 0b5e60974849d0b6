use crate::config::ScoutConfig;
use crate::domain::ListingReference;
use crate::scraper::{ImmoScout24, NoopViewer, ScraperError, Viewer};
use std::sync::{Arc, Mutex};

pub const FORWARD_URL: &str =
    "http://forward.immobilienscout24.de/9004EXPXXUA/expose/79605539?PID=63188280";

/// Loads one of the sample exposé pages under `src/tests/fixtures`.
pub fn fixture(name: &str) -> &'static str {
    match name {
        "street_and_neighborhood" => include_str!("fixtures/street_and_neighborhood.html"),
        "no_street" => include_str!("fixtures/no_street.html"),
        "not_found" => include_str!("fixtures/not_found.html"),
        "missing_address" => include_str!("fixtures/missing_address.html"),
        other => panic!("unknown fixture {other}"),
    }
}

/// A scout over `FORWARD_URL` whose fetcher always serves `fixture_name`.
pub fn mock_immo_scout(fixture_name: &str) -> ImmoScout24 {
    let html = fixture(fixture_name);
    ImmoScout24::with_capabilities(
        FORWARD_URL,
        &ScoutConfig::default(),
        Box::new(move |_: &ListingReference| Ok::<_, ScraperError>(html.to_string())),
        Box::new(NoopViewer),
    )
}

/// Records every URL it is asked to open.
#[derive(Clone, Default)]
pub struct RecordingViewer {
    pub opened: Arc<Mutex<Vec<String>>>,
}

impl Viewer for RecordingViewer {
    fn open(&self, url: &str) {
        self.opened.lock().unwrap().push(url.to_string());
    }
}
