//! Serializable snapshot shared by the CLI (`--json`) and the HTTP API

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use crate::types::{Coordinate, NextPrayer, Prayer, Schedule};

/// Schedule plus where "now" falls in it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Instant the report was resolved against
    pub now: DateTime<FixedOffset>,
    pub coordinate: Coordinate,
    /// Method name as requested (may be unrecognized, see `method_known`)
    pub method: String,
    /// False when `method` fell back to the default parameters
    pub method_known: bool,
    pub schedule: Schedule,
    /// Active period, None in the gap between midnight and Imsak
    pub current: Option<Prayer>,
    pub next: NextPrayer,
    /// Seconds until `next.time`
    pub remaining_secs: i64,
}

impl Report {
    /// Hours, minutes, seconds until the next boundary
    pub fn remaining_hms(&self) -> (i64, i64, i64) {
        let secs = self.remaining_secs.max(0);
        (secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
