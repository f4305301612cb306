//! Low-precision solar position: declination and equation of time
//!
//! Mean anomaly and mean longitude are linear in days since J2000.0; the
//! apparent longitude adds the two leading equation-of-centre terms.
//! Good to roughly a minute of time between 1950 and 2050.

use serde::{Deserialize, Serialize};
use crate::{EARTH_ORBIT_ECCENTRICITY, J2000_JD};

/// Sun position quantities needed by the hour-angle solver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarPosition {
    /// Declination (degrees)
    pub declination: f64,
    /// Apparent minus mean solar time (minutes)
    pub equation_of_time: f64,
}

/// Wrap an angle into [0, 360)
pub fn normalize_degrees(angle: f64) -> f64 {
    let a = angle % 360.0;
    if a < 0.0 { a + 360.0 } else { a }
}

/// Declination and equation of time at a Julian Date
pub fn solar_position(jd: f64) -> SolarPosition {
    let d = jd - J2000_JD;

    // mean anomaly
    let g = normalize_degrees(357.529 + 0.98560028 * d);
    // mean longitude
    let q = normalize_degrees(280.459 + 0.98564736 * d);
    // apparent ecliptic longitude
    let l = normalize_degrees(
        q + 1.915 * g.to_radians().sin() + 0.020 * (2.0 * g).to_radians().sin(),
    );
    // obliquity of the ecliptic
    let e = 23.439 - 0.00000036 * d;

    let declination = (e.to_radians().sin() * l.to_radians().sin()).asin().to_degrees();

    let y = (e / 2.0).to_radians().tan().powi(2);
    let ecc = EARTH_ORBIT_ECCENTRICITY;
    let (g, q) = (g.to_radians(), q.to_radians());
    let eq = y * (2.0 * q).sin()
        - 2.0 * ecc * g.sin()
        + 4.0 * ecc * y * g.sin() * (2.0 * q).cos()
        - 0.5 * y * y * (4.0 * q).sin()
        - 1.25 * ecc * ecc * (2.0 * g).sin();

    SolarPosition {
        declination,
        equation_of_time: 4.0 * eq.to_degrees(),
    }
}
