// extractor.rs
use crate::domain::ListingReference;
use crate::scraper::ScraperError;
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;
use url::Url;

const EXPOSE_MARKER: &str = "/expose/";

/// Raw input handed to the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingInput {
    /// Free text that may contain any number of listing URLs, even glued together.
    Text(String),
    /// One candidate URL per element.
    Urls(Vec<String>),
}

impl From<&str> for ListingInput {
    fn from(text: &str) -> Self {
        ListingInput::Text(text.to_string())
    }
}

impl From<String> for ListingInput {
    fn from(text: String) -> Self {
        ListingInput::Text(text)
    }
}

impl From<Vec<String>> for ListingInput {
    fn from(urls: Vec<String>) -> Self {
        ListingInput::Urls(urls)
    }
}

impl From<&[&str]> for ListingInput {
    fn from(urls: &[&str]) -> Self {
        ListingInput::Urls(urls.iter().map(|u| u.to_string()).collect())
    }
}

impl TryFrom<Value> for ListingInput {
    type Error = ScraperError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(ListingInput::Text(text)),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(url) => Ok(url),
                    other => Err(ScraperError::InvalidInputKind {
                        found: format!("list element {}", json_kind(&other)),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(ListingInput::Urls),
            other => Err(ScraperError::InvalidInputKind {
                found: json_kind(&other).to_string(),
            }),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Returns the unique listings in `input`, in order of first appearance.
pub fn extract_references(input: &ListingInput, base_url: &Url) -> Vec<ListingReference> {
    let ids: Vec<&str> = match input {
        ListingInput::Text(text) => scan_listing_ids(text),
        ListingInput::Urls(urls) => urls
            .iter()
            .filter_map(|candidate| scan_listing_ids(candidate).into_iter().next())
            .collect(),
    };

    let mut seen = HashSet::new();
    let references: Vec<ListingReference> = ids
        .into_iter()
        .filter(|id| seen.insert(*id))
        .map(|id| ListingReference {
            id: id.to_string(),
            url: canonical_url(base_url, id),
        })
        .collect();

    debug!("Extracted {} unique listing(s)", references.len());
    references
}

/// Finds every `/expose/<digits>` in `text`.
///
/// The digit run is taken greedily and scanning resumes right after it, so
/// URLs concatenated without a separator still split cleanly: the next URL
/// always starts with a non-digit scheme.
pub fn scan_listing_ids(text: &str) -> Vec<&str> {
    let mut ids = Vec::new();
    let mut rest = text;

    while let Some(pos) = rest.find(EXPOSE_MARKER) {
        let after = &rest[pos + EXPOSE_MARKER.len()..];
        let digits = after
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(after.len());

        if digits > 0 {
            ids.push(&after[..digits]);
        }
        rest = &after[digits..];
    }

    ids
}

pub fn canonical_url(base_url: &Url, id: &str) -> String {
    match base_url.join(&format!("expose/{id}")) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{}expose/{id}", base_url),
    }
}
