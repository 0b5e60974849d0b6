use serde::Serialize;

/// One listing on the source site, identified by the digits after `/expose/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ListingReference {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingRecord {
    pub full_address: String,
    pub found: bool,
}

impl ListingRecord {
    pub fn not_found() -> Self {
        Self {
            full_address: String::new(),
            found: false,
        }
    }

    pub(crate) fn found(full_address: String) -> Self {
        debug_assert!(!full_address.is_empty());
        Self {
            full_address,
            found: true,
        }
    }
}
