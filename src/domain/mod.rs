pub mod listing;

pub use listing::{ListingRecord, ListingReference};
