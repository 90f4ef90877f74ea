// crates/penamap-core/src/common.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// A WGS84 point. Latitude first, unlike the `"lng,lat"` source strings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// `true` when both values are finite and inside the WGS84 ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

/// Simple aggregate statistics for a [`PlaceStore`](crate::PlaceStore).
///
/// `by_category` follows [`Category::ALL`](crate::Category::ALL) order and
/// only lists categories that occur at least once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreStats {
    pub places: usize,
    pub by_category: Vec<(crate::Category, usize)>,
}
