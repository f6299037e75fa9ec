//! Value objects.

pub mod geo_point;
pub mod interaction_type;

pub use geo_point::GeoPoint;
pub use interaction_type::InteractionType;
