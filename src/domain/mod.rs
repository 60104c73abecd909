//! Domain logic for workspace listings lives here.

pub mod amenity;
pub mod cards;
pub mod entities;
pub mod format;
pub mod geo;
pub mod listing_state;
pub mod pricing;

pub use amenity::amenity_icon;
pub use cards::{build_card_views, CardView};
pub use entities::{Coordinates, DayPassDiscount, Workspace};
pub use geo::{distance_km, map_search_url, DistanceState};
pub use listing_state::{DetailStep, FetchStatus, ListingAction, ListingState, LookupError};
pub use pricing::{bulk_pass_price, BULK_DAYS};
