//! One day's schedule and the period query result

use chrono::{DateTime, Duration, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use crate::types::Prayer;

/// Six timestamps anchored to one civil date in one fixed offset.
///
/// Built by `core::ScheduleBuilder`; never mutated afterwards. Events whose
/// clock time wraps past midnight sit on the neighbouring date (Isha after
/// midnight in high-latitude summer is on `date + 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Civil date the schedule was computed for
    pub date: NaiveDate,
    pub imsak: DateTime<FixedOffset>,
    pub fajr: DateTime<FixedOffset>,
    pub dhuhr: DateTime<FixedOffset>,
    pub asr: DateTime<FixedOffset>,
    pub maghrib: DateTime<FixedOffset>,
    pub isha: DateTime<FixedOffset>,
}

impl Schedule {
    /// Timestamp of one marker
    pub fn time_of(&self, prayer: Prayer) -> DateTime<FixedOffset> {
        match prayer {
            Prayer::Imsak => self.imsak,
            Prayer::Fajr => self.fajr,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// The six (name, boundary) pairs in cyclic order
    pub fn boundaries(&self) -> [(Prayer, DateTime<FixedOffset>); 6] {
        Prayer::ALL.map(|p| (p, self.time_of(p)))
    }

    /// Half-open periods `[start, end)`, each named for its starting boundary.
    /// Isha ends at the following day's Imsak (Imsak + 24h).
    pub fn periods(&self) -> [(Prayer, DateTime<FixedOffset>, DateTime<FixedOffset>); 6] {
        Prayer::ALL.map(|p| {
            let end = match p {
                Prayer::Isha => self.imsak + Duration::days(1),
                _ => self.time_of(p.next()),
            };
            (p, self.time_of(p), end)
        })
    }
}

/// Result of the next-boundary query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextPrayer {
    pub prayer: Prayer,
    pub time: DateTime<FixedOffset>,
    /// All of today's boundaries have passed; `time` is on the next day
    pub wrapped_to_next_day: bool,
}

impl NextPrayer {
    /// Display name, with a "(tomorrow)" suffix after rollover
    pub fn label(&self) -> String {
        if self.wrapped_to_next_day {
            format!("{} (tomorrow)", self.prayer)
        } else {
            self.prayer.to_string()
        }
    }
}
