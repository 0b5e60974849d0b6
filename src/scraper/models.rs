use crate::scraper::ScraperError;
use scraper::{ElementRef, Html, Selector};

// exposé page
//  ├── #oss-error / .is24-error            -> listing removed
//  └── .address-block
//       ├── [data-qa=street]               "Husemannstraße 5,"
//       ├── [data-qa=zip] [data-qa=city]   "10435" "Berlin"
//       └── .zip-region-and-country        "10555 Berlin, Tiergarten (Tiergarten)" (older layout)

const NOT_FOUND_SELECTOR: &str = r#"#oss-error, .is24-error, [data-qa="expose-not-found"]"#;
const ADDRESS_SELECTOR: &str = r#".address-block, [data-qa="is24-expose-address"]"#;
const STREET_SELECTOR: &str = r#"[data-qa="street"], .street-name"#;
const ZIP_SELECTOR: &str = r#"[data-qa="zip"]"#;
const CITY_SELECTOR: &str = r#"[data-qa="city"]"#;
const ZIP_CITY_SELECTOR: &str = ".zip-region-and-country";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressFields {
    pub street: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
}

impl AddressFields {
    /// `"<street>, <zip> <city>"`, or `"<zip> <city>"` without a street.
    /// `None` unless both postal code and city are known.
    pub fn full_address(&self) -> Option<String> {
        let postal_code = self.postal_code.as_deref()?;
        let city = self.city.as_deref()?;

        Some(match self.street.as_deref() {
            Some(street) => format!("{street}, {postal_code} {city}"),
            None => format!("{postal_code} {city}"),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStatus {
    NotFound,
    Found(AddressFields),
}

pub struct ExposePage {
    document: Html,
}

impl ExposePage {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// The error marker wins over the address block; a page with neither is
    /// treated as removed too.
    pub fn classify(&self) -> Result<PageStatus, ScraperError> {
        let not_found = selector(NOT_FOUND_SELECTOR)?;
        if self.document.select(&not_found).next().is_some() {
            return Ok(PageStatus::NotFound);
        }

        let address = selector(ADDRESS_SELECTOR)?;
        match self.document.select(&address).next() {
            Some(block) => Ok(PageStatus::Found(Self::address_fields(block)?)),
            None => Ok(PageStatus::NotFound),
        }
    }

    fn address_fields(block: ElementRef<'_>) -> Result<AddressFields, ScraperError> {
        let street = first_text(block, STREET_SELECTOR)?
            .map(|s| s.trim_end_matches(',').trim_end().to_string())
            .filter(|s| !s.is_empty());

        let mut postal_code = first_text(block, ZIP_SELECTOR)?;
        let mut city = first_text(block, CITY_SELECTOR)?;

        if postal_code.is_none() || city.is_none() {
            if let Some(combined) = first_text(block, ZIP_CITY_SELECTOR)? {
                let (zip, rest) = split_zip_city(&combined);
                postal_code = postal_code.or(zip);
                city = city.or(rest);
            }
        }

        Ok(AddressFields {
            street,
            postal_code,
            city,
        })
    }
}

fn selector(css: &str) -> Result<Selector, ScraperError> {
    Selector::parse(css).map_err(|e| ScraperError::HtmlParse(e.to_string()))
}

/// Whitespace-collapsed text of the first match, or `None` if absent or blank.
fn first_text(block: ElementRef<'_>, css: &str) -> Result<Option<String>, ScraperError> {
    let sel = selector(css)?;
    Ok(block
        .select(&sel)
        .next()
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
        .filter(|s| !s.is_empty()))
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// "10555 Berlin, Tiergarten (Tiergarten)" -> ("10555", "Berlin").
/// The neighborhood after the first comma is dropped.
pub(crate) fn split_zip_city(text: &str) -> (Option<String>, Option<String>) {
    let text = text.split(',').next().unwrap_or_default().trim();
    match text.split_once(' ') {
        Some((zip, city)) if zip.chars().all(|c| c.is_ascii_digit()) => {
            let city = city.trim();
            (
                Some(zip.to_string()),
                (!city.is_empty()).then(|| city.to_string()),
            )
        }
        _ if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) => {
            (Some(text.to_string()), None)
        }
        _ => (None, None),
    }
}
