use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    /// Input was neither a string nor a list of strings.
    #[error("Invalid input kind: expected a string or a list of strings, got {found}")]
    InvalidInputKind { found: String },

    #[error("Fetch failed for {url}: {reason}")]
    FetchFailed { url: String, reason: String },

    /// The page looked like a live listing but carried no usable address.
    #[error("Address fields missing on listing {id}")]
    AddressFieldsMissing { id: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("HTML parse error: {0}")]
    HtmlParse(String),
}
