//! Civil date + time of day → Julian Date (proleptic Gregorian)

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

/// Julian Date for a civil date and clock time.
///
/// January and February count as months 13 and 14 of the previous year.
/// No range checks; the clock time is taken as-is (no timezone shift).
pub fn julian_date(date: NaiveDate, time: NaiveTime) -> f64 {
    let mut year = date.year() as f64;
    let mut month = date.month() as f64;
    if month <= 2.0 {
        year -= 1.0;
        month += 12.0;
    }

    let a = (year / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    let jd = (365.25 * (year + 4716.0)).floor()
        + (30.6001 * (month + 1.0)).floor()
        + date.day() as f64
        + b
        - 1524.5;

    jd + day_fraction(time)
}

/// Clock time as a fraction of a day
fn day_fraction(time: NaiveTime) -> f64 {
    (time.hour() as f64 + time.minute() as f64 / 60.0 + time.second() as f64 / 3600.0) / 24.0
}
