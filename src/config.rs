// config.rs
use crate::scraper::ScraperError;
use std::time::Duration;
use url::Url;

const DEFAULT_BASE_URL: &str = "https://www.immobilienscout24.de/";
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ScoutConfig {
    pub base_url: Url,
    pub user_agent: String,
    pub timeout: Duration,
    pub open_browser: bool,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            open_browser: false,
        }
    }
}

impl ScoutConfig {
    /// Reads `IMMOSCOUT_*` variables, falling back to defaults for unset ones.
    pub fn from_env() -> Result<Self, ScraperError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ScraperError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("IMMOSCOUT_BASE_URL") {
            config.base_url = parse_base_url(&raw)?;
        }

        if let Some(raw) = lookup("IMMOSCOUT_USER_AGENT") {
            if raw.trim().is_empty() {
                return Err(ScraperError::Config(
                    "IMMOSCOUT_USER_AGENT must not be empty".into(),
                ));
            }
            config.user_agent = raw;
        }

        if let Some(raw) = lookup("IMMOSCOUT_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ScraperError::Config(format!("IMMOSCOUT_TIMEOUT_SECS is not a number: {raw}"))
            })?;
            if secs == 0 {
                return Err(ScraperError::Config(
                    "IMMOSCOUT_TIMEOUT_SECS must be at least 1".into(),
                ));
            }
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(raw) = lookup("IMMOSCOUT_OPEN_BROWSER") {
            config.open_browser = parse_flag(&raw)?;
        }

        Ok(config)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ScraperError> {
    // Url::join drops the last path segment unless the base ends with '/'
    let mut raw = raw.trim().to_string();
    if !raw.ends_with('/') {
        raw.push('/');
    }
    Url::parse(&raw)
        .map_err(|e| ScraperError::Config(format!("IMMOSCOUT_BASE_URL is invalid: {e}")))
}

fn parse_flag(raw: &str) -> Result<bool, ScraperError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ScraperError::Config(format!(
            "IMMOSCOUT_OPEN_BROWSER is not a flag: {other}"
        ))),
    }
}
