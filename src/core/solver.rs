//! Hour-angle solver: sun altitude → local clock time (fractional hours)

use crate::core::SolarPosition;
use crate::types::{Coordinate, PrayerError};
use crate::ASR_SHADOW_FACTOR;

/// Which side of solar noon an event falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Sun rising (Fajr, sunrise)
    BeforeNoon,
    /// Sun setting (Asr, Maghrib, Isha)
    AfterNoon,
}

/// Wrap fractional hours into [0, 24)
pub fn normalize_hours(hours: f64) -> f64 {
    let h = hours % 24.0;
    if h < 0.0 { h + 24.0 } else { h }
}

/// Local clock time of solar transit, unwrapped.
///
/// Must be finite: a NaN here would survive `normalize_hours` and anchor at midnight.
fn transit(coordinate: Coordinate, sun: &SolarPosition, tz_hours: f64) -> Result<f64, PrayerError> {
    let noon = 12.0 + tz_hours - coordinate.longitude / 15.0 - sun.equation_of_time / 60.0;
    if !noon.is_finite() {
        return Err(PrayerError::NonFiniteInput {
            prayer: None,
            longitude: coordinate.longitude,
            tz_hours,
        });
    }
    Ok(noon)
}

/// Local clock time of solar noon, in [0, 24)
pub fn solar_noon(coordinate: Coordinate, sun: &SolarPosition, tz_hours: f64) -> Result<f64, PrayerError> {
    transit(coordinate, sun, tz_hours).map(normalize_hours)
}

/// Time at which the sun crosses `altitude` degrees (negative = below the horizon).
///
/// Fails with `InvalidGeometry` when the sun never reaches that altitude on
/// this day, i.e. the hour-angle cosine lies outside [-1, 1] or is NaN, and
/// with `NonFiniteInput` when longitude or offset is not finite.
pub fn solve(
    altitude: f64,
    coordinate: Coordinate,
    sun: &SolarPosition,
    tz_hours: f64,
    side: Side,
) -> Result<f64, PrayerError> {
    let (a, phi, delta) = (
        altitude.to_radians(),
        coordinate.latitude.to_radians(),
        sun.declination.to_radians(),
    );

    let cos_h = (a.sin() - phi.sin() * delta.sin()) / (phi.cos() * delta.cos());
    if !(-1.0..=1.0).contains(&cos_h) {
        return Err(PrayerError::InvalidGeometry { prayer: None, altitude, cos_h });
    }

    let h = cos_h.acos().to_degrees() / 15.0;
    let noon = transit(coordinate, sun, tz_hours)?;
    let t = match side {
        Side::BeforeNoon => noon - h,
        Side::AfterNoon => noon + h,
    };
    Ok(normalize_hours(t))
}

/// Sun altitude at which a stick's shadow is its noon shadow plus
/// `ASR_SHADOW_FACTOR` times its length.
pub fn asr_altitude(latitude: f64, declination: f64) -> f64 {
    let noon_zenith = (latitude - declination).abs().to_radians();
    (1.0 / (ASR_SHADOW_FACTOR + noon_zenith.tan())).atan().to_degrees()
}
