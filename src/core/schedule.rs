//! Schedule builder: runs the solver once per prayer and anchors the results
//! to a civil date in a fixed offset.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc};
use tracing::debug;

use crate::core::{julian_date, normalize_hours, solar_noon, solar_position, solve, asr_altitude, Side};
use crate::types::{Coordinate, MethodParams, Prayer, PrayerError, Schedule};
use crate::{IMSAK_OFFSET_MINUTES, SUNSET_DEPRESSION_DEG};

/// Builds schedules for one location and parameter set
#[derive(Debug, Clone, Copy)]
pub struct ScheduleBuilder {
    coordinate: Coordinate,
    params: MethodParams,
    offset: FixedOffset,
}

impl ScheduleBuilder {
    /// New builder, UTC until `offset` is called
    pub fn new(coordinate: Coordinate, params: impl Into<MethodParams>) -> Self {
        Self {
            coordinate,
            params: params.into(),
            offset: Utc.fix(),
        }
    }

    /// Civil UTC offset the schedule is expressed in
    pub fn offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    pub fn utc_offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn params(&self) -> MethodParams {
        self.params
    }

    /// Schedule for `date`, solar position taken at local 00:00
    pub fn build(&self, date: NaiveDate) -> Result<Schedule, PrayerError> {
        self.build_at(date.and_time(NaiveTime::MIN))
    }

    /// Schedule for the date of `at`, solar position taken at `at`'s clock time
    pub fn build_at(&self, at: NaiveDateTime) -> Result<Schedule, PrayerError> {
        let date = at.date();
        let tz = self.offset.local_minus_utc() as f64 / 3600.0;
        let sun = solar_position(julian_date(date, at.time()));
        let c = self.coordinate;
        let p = self.params;

        debug!(
            %date, tz, latitude = c.latitude, longitude = c.longitude,
            declination = sun.declination, eq_of_time = sun.equation_of_time,
            "solar position"
        );

        let fajr = solve(-p.fajr_angle, c, &sun, tz, Side::BeforeNoon)
            .map_err(|e| e.for_prayer(Prayer::Fajr))?;
        let dhuhr = solar_noon(c, &sun, tz).map_err(|e| e.for_prayer(Prayer::Dhuhr))?;
        let asr = solve(asr_altitude(c.latitude, sun.declination), c, &sun, tz, Side::AfterNoon)
            .map_err(|e| e.for_prayer(Prayer::Asr))?;
        let maghrib = solve(-SUNSET_DEPRESSION_DEG, c, &sun, tz, Side::AfterNoon)
            .map_err(|e| e.for_prayer(Prayer::Maghrib))?;
        let isha = if p.uses_isha_interval() {
            normalize_hours(maghrib + p.isha_interval_minutes / 60.0)
        } else {
            solve(-p.isha_angle, c, &sun, tz, Side::AfterNoon)
                .map_err(|e| e.for_prayer(Prayer::Isha))?
        };

        let dhuhr = anchor_hours(date, self.offset, dhuhr);
        let anchor = |hours: f64, side: Side| unwrap_day(anchor_hours(date, self.offset, hours), dhuhr, side);
        let fajr = anchor(fajr, Side::BeforeNoon);

        Ok(Schedule {
            date,
            imsak: fajr - Duration::minutes(IMSAK_OFFSET_MINUTES),
            fajr,
            dhuhr,
            asr: anchor(asr, Side::AfterNoon),
            maghrib: anchor(maghrib, Side::AfterNoon),
            isha: anchor(isha, Side::AfterNoon),
        })
    }
}

/// Compute the schedule for one (date, offset, coordinate, method) tuple
pub fn compute_schedule(
    date: NaiveDate,
    offset: FixedOffset,
    coordinate: Coordinate,
    params: impl Into<MethodParams>,
) -> Result<Schedule, PrayerError> {
    ScheduleBuilder::new(coordinate, params).offset(offset).build(date)
}

/// Move an event whose clock time wrapped past midnight onto the day it
/// actually falls on: after-noon events earlier than Dhuhr belong to the next
/// day (Isha past midnight in high-latitude summer), before-noon events later
/// than Dhuhr to the previous one.
fn unwrap_day(t: DateTime<FixedOffset>, dhuhr: DateTime<FixedOffset>, side: Side) -> DateTime<FixedOffset> {
    match side {
        Side::AfterNoon if t < dhuhr => t + Duration::days(1),
        Side::BeforeNoon if t > dhuhr => t - Duration::days(1),
        _ => t,
    }
}

/// Local midnight of `date` plus `hours`, split into whole h/m/s (truncated)
fn anchor_hours(date: NaiveDate, offset: FixedOffset, hours: f64) -> DateTime<FixedOffset> {
    let h = hours.trunc();
    let m = ((hours - h) * 60.0).trunc();
    let s = (((hours - h) * 60.0 - m) * 60.0).trunc();
    let local = date.and_time(NaiveTime::MIN)
        + Duration::hours(h as i64)
        + Duration::minutes(m as i64)
        + Duration::seconds(s as i64);
    offset.from_utc_datetime(&(local - Duration::seconds(offset.local_minus_utc() as i64)))
}
