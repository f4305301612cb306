//! Solver errors

use crate::types::Prayer;

/// Failures from the prayer time solver
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum PrayerError {
    /// The sun never reaches the requested altitude on this day
    /// (midnight sun or polar night for that angle).
    #[error("invalid geometry{}: sun never reaches {altitude:.3}° (cos H = {cos_h:.4})", .prayer.map(|p| format!(" for {p}")).unwrap_or_default())]
    InvalidGeometry {
        /// Prayer being solved, once known
        prayer: Option<Prayer>,
        /// Target sun altitude in degrees
        altitude: f64,
        /// Hour-angle cosine that fell outside [-1, 1]
        cos_h: f64,
    },

    /// Longitude or UTC offset is NaN or infinite, so solar noon is undefined
    #[error("invalid input{}: no solar noon for longitude {longitude} at UTC offset {tz_hours} h", .prayer.map(|p| format!(" for {p}")).unwrap_or_default())]
    NonFiniteInput {
        prayer: Option<Prayer>,
        longitude: f64,
        tz_hours: f64,
    },
}

impl PrayerError {
    /// Stable code string (for logs and API bodies)
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidGeometry { .. } => "E001_INVALID_GEOMETRY",
            Self::NonFiniteInput { .. } => "E002_NON_FINITE_INPUT",
        }
    }

    /// Attach the prayer that was being solved
    pub fn for_prayer(self, p: Prayer) -> Self {
        match self {
            Self::InvalidGeometry { altitude, cos_h, .. } => {
                Self::InvalidGeometry { prayer: Some(p), altitude, cos_h }
            }
            Self::NonFiniteInput { longitude, tz_hours, .. } => {
                Self::NonFiniteInput { prayer: Some(p), longitude, tz_hours }
            }
        }
    }
}
