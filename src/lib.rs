//! Salat: prayer time calculator
//!
//! Solar position → hour-angle solver → six-prayer schedule → period resolver.
//! The CLI, watch loop and HTTP API are thin layers over `core`.

pub mod core;
pub mod types;

// =============================================================================
// ASTRONOMY [C]
// =============================================================================

/// Julian Date of the J2000.0 epoch
pub const J2000_JD: f64 = 2451545.0;

/// Eccentricity of Earth's orbit, weights the equation-of-time terms in the mean anomaly
pub const EARTH_ORBIT_ECCENTRICITY: f64 = 0.016708634;

/// Sun altitude at sunrise/sunset (refraction + semidiameter), degrees below horizon
pub const SUNSET_DEPRESSION_DEG: f64 = 0.833;

/// Shadow factor for Asr (single shadow length)
pub const ASR_SHADOW_FACTOR: f64 = 1.0;

// =============================================================================
// SCHEDULE [C]
// =============================================================================

/// Imsak sits this many minutes before Fajr, always
pub const IMSAK_OFFSET_MINUTES: i64 = 10;

/// Fallback dawn angle for unrecognized method names
pub const DEFAULT_FAJR_ANGLE: f64 = 18.0;

/// Fallback nightfall angle for unrecognized method names
pub const DEFAULT_ISHA_ANGLE: f64 = 17.0;

// =============================================================================
// SURFACES
// =============================================================================

/// Watch loop refresh period (seconds)
pub const WATCH_INTERVAL_SECS: u64 = 60;

/// Default API bind address
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
