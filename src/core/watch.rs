//! Watch engine: one `update` per refresh tick
//!
//! Keeps the current day's schedule, rebuilding it when the civil date in
//! the schedule's offset changes, and reports when a new period begins.

use chrono::{DateTime, FixedOffset, TimeZone};
use tracing::{debug, info};

use crate::core::{build_report, progress, ScheduleBuilder};
use crate::types::{Prayer, PrayerError, Report, Schedule};

/// Output of one tick
#[derive(Debug, Clone, PartialEq)]
pub struct WatchTick {
    pub report: Report,
    /// Set when a period began since the previous tick
    pub entered: Option<Prayer>,
    /// Fraction of the current interval elapsed (0.0 - 1.0)
    pub progress: f64,
    /// The schedule was (re)computed on this tick
    pub recomputed: bool,
}

/// Stateful driver for the watch loop
#[derive(Debug)]
pub struct WatchEngine {
    builder: ScheduleBuilder,
    method: String,
    schedule: Option<Schedule>,
    /// Active period seen on the previous tick (outer None = no tick yet)
    last_active: Option<Option<Prayer>>,
    update_count: u64,
}

impl WatchEngine {
    /// `method` is the name reported back; parameters come from `builder`
    pub fn new(builder: ScheduleBuilder, method: impl Into<String>) -> Self {
        Self {
            builder,
            method: method.into(),
            schedule: None,
            last_active: None,
            update_count: 0,
        }
    }

    /// Advance to `now`
    pub fn update<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> Result<WatchTick, PrayerError> {
        let now: DateTime<FixedOffset> = now.with_timezone(&self.builder.utc_offset());
        self.update_count += 1;

        let (schedule, recomputed) = match self.schedule {
            Some(s) if s.date == now.date_naive() => (s, false),
            _ => {
                let s = self.builder.build(now.date_naive())?;
                debug!(date = %s.date, "schedule recomputed");
                self.schedule = Some(s);
                (s, true)
            }
        };

        let report = build_report(now, schedule, self.builder.coordinate(), &self.method);
        let entered = match self.last_active {
            Some(prev) if prev != report.current => report.current,
            _ => None,
        };
        if let Some(p) = entered {
            info!(prayer = %p, "period started");
        }
        self.last_active = Some(report.current);

        Ok(WatchTick {
            progress: progress(now, &schedule, &report.next),
            report,
            entered,
            recomputed,
        })
    }

    /// Cached schedule, if any tick has run
    pub fn schedule(&self) -> Option<&Schedule> {
        self.schedule.as_ref()
    }

    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Drop cached state
    pub fn reset(&mut self) {
        self.schedule = None;
        self.last_active = None;
        self.update_count = 0;
    }
}
