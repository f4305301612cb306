//! Calculation methods (conventions) and their twilight parameters

use serde::{Deserialize, Serialize};
use crate::{DEFAULT_FAJR_ANGLE, DEFAULT_ISHA_ANGLE};

/// The eight supported calculation conventions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// Muslim World League
    Mwl,
    /// Islamic Society of North America
    Isna,
    /// Egyptian General Authority of Survey
    Egypt,
    /// Umm al-Qura University, Makkah
    Makkah,
    /// University of Islamic Sciences, Karachi
    Karachi,
    /// Institute of Geophysics, University of Tehran
    Tehran,
    /// Kementerian Agama Republik Indonesia
    #[default]
    Kemenag,
    /// Jabatan Kemajuan Islam Malaysia
    Jakim,
}

/// Twilight parameters for one convention
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MethodParams {
    /// Sun depression at Fajr (degrees below horizon)
    pub fajr_angle: f64,
    /// Sun depression at Isha (degrees below horizon), unused when interval > 0
    pub isha_angle: f64,
    /// Isha as minutes after Maghrib; 0 means "use isha_angle"
    pub isha_interval_minutes: f64,
}

impl Method {
    pub const ALL: [Method; 8] = [
        Method::Mwl,
        Method::Isna,
        Method::Egypt,
        Method::Makkah,
        Method::Karachi,
        Method::Tehran,
        Method::Kemenag,
        Method::Jakim,
    ];

    /// Canonical short name
    pub fn name(&self) -> &'static str {
        match self {
            Method::Mwl => "MWL",
            Method::Isna => "ISNA",
            Method::Egypt => "Egypt",
            Method::Makkah => "Makkah",
            Method::Karachi => "Karachi",
            Method::Tehran => "Tehran",
            Method::Kemenag => "Kemenag",
            Method::Jakim => "JAKIM",
        }
    }

    /// Human-readable authority
    pub fn description(&self) -> &'static str {
        match self {
            Method::Mwl => "Muslim World League",
            Method::Isna => "Islamic Society of North America",
            Method::Egypt => "Egyptian General Authority of Survey",
            Method::Makkah => "Umm al-Qura University, Makkah",
            Method::Karachi => "University of Islamic Sciences, Karachi",
            Method::Tehran => "Institute of Geophysics, University of Tehran",
            Method::Kemenag => "Kementerian Agama Republik Indonesia",
            Method::Jakim => "Jabatan Kemajuan Islam Malaysia",
        }
    }

    /// Look up a method by name, case-insensitively
    pub fn from_name(name: &str) -> Option<Method> {
        let name = name.trim();
        Method::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }

    /// Fixed parameters for this convention
    pub fn params(&self) -> MethodParams {
        let (fajr_angle, isha_angle, isha_interval_minutes) = match self {
            Method::Mwl => (18.0, 17.0, 0.0),
            Method::Isna => (15.0, 15.0, 0.0),
            Method::Egypt => (19.5, 17.5, 0.0),
            Method::Makkah => (18.5, 0.0, 90.0),
            Method::Karachi => (18.0, 18.0, 0.0),
            Method::Tehran => (17.7, 14.0, 0.0),
            Method::Kemenag => (20.0, 18.0, 0.0),
            Method::Jakim => (20.0, 18.0, 0.0),
        };
        MethodParams { fajr_angle, isha_angle, isha_interval_minutes }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error for `Method::from_str`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown calculation method: {0}")]
pub struct UnknownMethod(pub String);

impl std::str::FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::from_name(s).ok_or_else(|| UnknownMethod(s.to_string()))
    }
}

impl MethodParams {
    /// Parameters used for any unrecognized method name
    pub const DEFAULT: MethodParams = MethodParams {
        fajr_angle: DEFAULT_FAJR_ANGLE,
        isha_angle: DEFAULT_ISHA_ANGLE,
        isha_interval_minutes: 0.0,
    };

    /// Resolve a method name to parameters.
    ///
    /// Never fails: unknown names silently map to `MethodParams::DEFAULT`.
    pub fn for_name(name: &str) -> MethodParams {
        Method::from_name(name)
            .map(|m| m.params())
            .unwrap_or(MethodParams::DEFAULT)
    }

    /// True when Isha is a fixed interval after Maghrib
    pub fn uses_isha_interval(&self) -> bool {
        self.isha_interval_minutes > 0.0
    }
}

impl From<Method> for MethodParams {
    fn from(method: Method) -> Self {
        method.params()
    }
}

impl Default for MethodParams {
    fn default() -> Self {
        MethodParams::DEFAULT
    }
}
