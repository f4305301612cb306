//! Observer location

use serde::{Deserialize, Serialize};

/// Geographic coordinate in degrees.
///
/// Not validated: out-of-range values are accepted and usually surface
/// later as `PrayerError::InvalidGeometry`; a NaN or infinite longitude
/// as `PrayerError::NonFiniteInput`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Degrees north (negative = south)
    pub latitude: f64,
    /// Degrees east (negative = west)
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}
