//! Read-only JSON configuration
//!
//! Default location: `~/.config/salat/config.json`. A missing default file
//! yields `Config::default()`; a missing explicit `--config` path is an error.
//! Command-line flags override file values via `Config::with_overrides`.

use std::path::{Path, PathBuf};

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::types::{Coordinate, Method, MethodParams};

/// Errors while locating, reading or interpreting the config
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("UTC offset {0} hours is out of range (-24, 24)")]
    InvalidOffset(f64),

    #[error("cannot determine home directory")]
    NoHomeDir,
}

impl ConfigError {
    /// Stable code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "C001_CONFIG_IO",
            Self::Parse { .. } => "C002_CONFIG_PARSE",
            Self::InvalidOffset(_) => "C003_INVALID_OFFSET",
            Self::NoHomeDir => "C004_NO_HOME_DIR",
        }
    }
}

/// Persisted user settings (never written by this program)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub latitude: f64,
    pub longitude: f64,
    /// Method name; unknown names fall back to the default parameters
    pub method: String,
    /// Fixed UTC offset in hours; None = use the system's current offset
    pub utc_offset: Option<f64>,
    /// Display label for the location
    pub location_name: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            latitude: -6.2,
            longitude: 106.816666,
            method: Method::default().name().to_string(),
            utc_offset: None,
            location_name: Some("Jakarta".to_string()),
        }
    }
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub utc_offset: Option<f64>,
    pub method: Option<String>,
}

impl Config {
    /// `~/.config/salat/config.json`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".config").join("salat").join("config.json"))
    }

    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` if given, else the default file if it exists, else defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
        if let Some(path) = path {
            return Config::load(path);
        }
        let default = Config::default_path()?;
        if default.exists() {
            Config::load(&default)
        } else {
            debug!(path = %default.display(), "no config file, using defaults");
            Ok(Config::default())
        }
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, o: &Overrides) -> Self {
        if let Some(lat) = o.latitude {
            self.latitude = lat;
        }
        if let Some(lon) = o.longitude {
            self.longitude = lon;
        }
        if let Some(tz) = o.utc_offset {
            self.utc_offset = Some(tz);
        }
        if let Some(ref m) = o.method {
            self.method = m.clone();
        }
        self
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Method parameters; an unknown name is logged and falls back
    pub fn params(&self) -> MethodParams {
        if Method::from_name(&self.method).is_none() {
            warn!(method = %self.method, "unknown calculation method, using default parameters (18°/17°)");
        }
        MethodParams::for_name(&self.method)
    }

    /// Configured offset, or `system` when none is set
    pub fn resolve_offset(&self, system: FixedOffset) -> Result<FixedOffset, ConfigError> {
        match self.utc_offset {
            Some(hours) => offset_from_hours(hours).ok_or(ConfigError::InvalidOffset(hours)),
            None => Ok(system),
        }
    }

    /// Label for display: configured name, else the coordinate
    pub fn location_label(&self) -> String {
        match &self.location_name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => self.coordinate().to_string(),
        }
    }
}

/// Fixed offset from fractional hours (e.g. 5.5 → +05:30), rounded to the second
pub fn offset_from_hours(hours: f64) -> Option<FixedOffset> {
    if !hours.is_finite() {
        return None;
    }
    let secs = (hours * 3600.0).round();
    if secs.abs() >= 86_400.0 {
        return None;
    }
    FixedOffset::east_opt(secs as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("salat-config-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let path = temp_file("partial.json", r#"{"latitude": 3.139, "longitude": 101.6869, "method": "JAKIM"}"#);
        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.latitude, 3.139);
        assert_eq!(cfg.method, "JAKIM");
        assert_eq!(cfg.utc_offset, None);
        assert_eq!(cfg.location_name, Some("Jakarta".to_string()));
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let err = Config::load_or_default(Some(Path::new("/nonexistent/salat.json"))).unwrap_err();
        assert_eq!(err.code(), "C001_CONFIG_IO");
    }

    #[test]
    fn test_load_bad_json_fails() {
        let path = temp_file("bad.json", "{ latitude: ");
        let err = Config::load(&path).unwrap_err();
        assert_eq!(err.code(), "C002_CONFIG_PARSE");
    }

    #[test]
    fn test_overrides_win() {
        let cfg = Config::default().with_overrides(&Overrides {
            latitude: Some(21.4225),
            longitude: None,
            utc_offset: Some(3.0),
            method: Some("Makkah".to_string()),
        });
        assert_eq!(cfg.latitude, 21.4225);
        assert_eq!(cfg.longitude, 106.816666);
        assert_eq!(cfg.utc_offset, Some(3.0));
        assert_eq!(cfg.params(), Method::Makkah.params());
    }

    #[test]
    fn test_unknown_method_falls_back() {
        let cfg = Config { method: "Kemenaag".to_string(), ..Config::default() };
        assert_eq!(cfg.params(), MethodParams::DEFAULT);
    }

    #[test]
    fn test_resolve_offset() {
        let system = FixedOffset::east_opt(3600).unwrap();
        let cfg = Config::default();
        assert_eq!(cfg.resolve_offset(system).unwrap(), system);

        let cfg = Config { utc_offset: Some(5.5), ..Config::default() };
        assert_eq!(cfg.resolve_offset(system).unwrap().local_minus_utc(), 19_800);

        let cfg = Config { utc_offset: Some(30.0), ..Config::default() };
        assert_eq!(cfg.resolve_offset(system).unwrap_err().code(), "C003_INVALID_OFFSET");
    }

    #[test]
    fn test_offset_from_hours_rejects_nan() {
        assert!(offset_from_hours(f64::NAN).is_none());
        assert!(offset_from_hours(-24.0).is_none());
        assert_eq!(offset_from_hours(-3.5).unwrap().local_minus_utc(), -12_600);
    }

    #[test]
    fn test_location_label() {
        let cfg = Config { location_name: None, latitude: 1.5, longitude: 2.25, ..Config::default() };
        assert_eq!(cfg.location_label(), "1.500000, 2.250000");
        assert_eq!(Config::default().location_label(), "Jakarta");
    }
}
