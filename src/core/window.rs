//! Period resolver: where does "now" fall in a schedule?
//!
//! Six half-open periods in cyclic order, each named for its start:
//! - Imsak   [imsak, fajr)
//! - Fajr    [fajr, dhuhr)
//! - Dhuhr   [dhuhr, asr)
//! - Asr     [asr, maghrib)
//! - Maghrib [maghrib, isha)
//! - Isha    [isha, imsak + 24h)
//!
//! Before Imsak (after local midnight) no period is active.

use chrono::{DateTime, Duration, FixedOffset, Timelike};

use crate::types::{Coordinate, Method, NextPrayer, Prayer, Report, Schedule};

/// Active period at `now`, inclusive of its start boundary
pub fn active_period(now: DateTime<FixedOffset>, schedule: &Schedule) -> Option<Prayer> {
    schedule
        .periods()
        .into_iter()
        .find(|(_, start, end)| now >= *start && now < *end)
        .map(|(prayer, _, _)| prayer)
}

/// First boundary strictly after `now`, rolling over to the next day's
/// earliest boundary once all six have passed
pub fn next_period(now: DateTime<FixedOffset>, schedule: &Schedule) -> NextPrayer {
    let mut boundaries = schedule.boundaries();
    boundaries.sort_by_key(|(_, t)| *t);

    if let Some((prayer, time)) = boundaries.iter().find(|(_, t)| *t > now) {
        return NextPrayer { prayer: *prayer, time: *time, wrapped_to_next_day: false };
    }

    let (prayer, first) = boundaries[0];
    NextPrayer {
        prayer,
        time: first + Duration::days(1),
        wrapped_to_next_day: true,
    }
}

/// Resolve `now` against a schedule into a serializable report
pub fn build_report(
    now: DateTime<FixedOffset>,
    schedule: Schedule,
    coordinate: Coordinate,
    method: &str,
) -> Report {
    let next = next_period(now, &schedule);
    Report {
        now,
        coordinate,
        method: method.to_string(),
        method_known: Method::from_name(method).is_some(),
        schedule,
        current: active_period(now, &schedule),
        next,
        remaining_secs: (next.time - now).num_seconds(),
    }
}

/// Fraction of the way from the previous boundary to `next` (0.0 - 1.0).
///
/// Before Imsak the previous boundary is local midnight.
pub fn progress(now: DateTime<FixedOffset>, schedule: &Schedule, next: &NextPrayer) -> f64 {
    let previous = match active_period(now, schedule) {
        Some(p) => schedule.time_of(p),
        None => now - Duration::seconds(now.num_seconds_from_midnight() as i64),
    };
    let span = (next.time - previous).num_seconds();
    if span <= 0 {
        return 0.0;
    }
    ((now - previous).num_seconds() as f64 / span as f64).clamp(0.0, 1.0)
}
