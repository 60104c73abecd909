pub mod geolocation;
pub mod listing_source;
