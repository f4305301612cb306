//! The six daily markers, in cyclic order

use serde::{Deserialize, Serialize};

/// A named boundary in the daily schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prayer {
    /// Pre-dawn marker, Fajr minus ten minutes
    Imsak,
    /// Dawn
    Fajr,
    /// Solar noon
    Dhuhr,
    /// Afternoon (shadow length)
    Asr,
    /// Sunset
    Maghrib,
    /// Nightfall
    Isha,
}

impl Prayer {
    pub const ALL: [Prayer; 6] = [
        Prayer::Imsak,
        Prayer::Fajr,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Prayer::Imsak => "Imsak",
            Prayer::Fajr => "Fajr",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }

    /// Glyph shown next to the name
    pub fn symbol(&self) -> &'static str {
        match self {
            Prayer::Imsak => "🌙",
            Prayer::Fajr => "🌅",
            Prayer::Dhuhr => "☀️",
            Prayer::Asr => "🌤️",
            Prayer::Maghrib => "🌇",
            Prayer::Isha => "✨",
        }
    }

    /// Next marker in the daily cycle (Isha wraps to Imsak)
    pub fn next(&self) -> Prayer {
        match self {
            Prayer::Imsak => Prayer::Fajr,
            Prayer::Fajr => Prayer::Dhuhr,
            Prayer::Dhuhr => Prayer::Asr,
            Prayer::Asr => Prayer::Maghrib,
            Prayer::Maghrib => Prayer::Isha,
            Prayer::Isha => Prayer::Imsak,
        }
    }

    /// Parse a name; accepts the Indonesian names too
    pub fn from_name(name: &str) -> Option<Prayer> {
        match name.trim().to_ascii_lowercase().as_str() {
            "imsak" => Some(Prayer::Imsak),
            "fajr" | "subuh" => Some(Prayer::Fajr),
            "dhuhr" | "dzuhur" => Some(Prayer::Dhuhr),
            "asr" | "ashar" => Some(Prayer::Asr),
            "maghrib" => Some(Prayer::Maghrib),
            "isha" | "isya" => Some(Prayer::Isha),
            _ => None,
        }
    }
}

impl std::fmt::Display for Prayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Glyph for a prayer name, or "" if the name is not one of the six
pub fn symbol_for(name: &str) -> &'static str {
    Prayer::from_name(name).map(|p| p.symbol()).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_returns_to_start() {
        let mut p = Prayer::Imsak;
        for expected in Prayer::ALL.iter().skip(1) {
            p = p.next();
            assert_eq!(p, *expected);
        }
        assert_eq!(p.next(), Prayer::Imsak);
    }

    #[test]
    fn test_symbol_for_known_and_unknown() {
        assert_eq!(symbol_for("Maghrib"), "🌇");
        assert_eq!(symbol_for("isya"), "✨");
        assert_eq!(symbol_for("Tahajjud"), "");
        assert_eq!(symbol_for(""), "");
    }

    #[test]
    fn test_names_round_trip() {
        for p in Prayer::ALL {
            assert_eq!(Prayer::from_name(p.name()), Some(p));
        }
    }
}
