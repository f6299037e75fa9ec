//! Geographic point value object.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair.
///
/// Carried on users, businesses, and request contexts. The scoring formula
/// only checks for presence today; the coordinates are kept so a
/// distance-decayed bonus can be introduced without a schema change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl GeoPoint {
    /// Creates a new geo-point.
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}
