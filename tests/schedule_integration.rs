//! Integration tests for schedule computation and period resolution
//!
//! Ordering, Imsak offset, boundary membership, rollover, geometry failure
//! and the Jakarta reference day.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, Timelike};
use pretty_assertions::assert_eq;
use salat::core::{active_period, compute_schedule, next_period, ScheduleBuilder, WatchEngine};
use salat::types::{Coordinate, Method, MethodParams, Prayer, Schedule};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn hours(h: i32) -> FixedOffset {
    FixedOffset::east_opt(h * 3600).unwrap()
}

fn jakarta(d: NaiveDate) -> Schedule {
    compute_schedule(d, hours(7), Coordinate::new(-6.2, 106.8), Method::Kemenag).unwrap()
}

fn minutes_of_day(t: DateTime<FixedOffset>) -> u32 {
    t.hour() * 60 + t.minute()
}

fn assert_within(t: DateTime<FixedOffset>, from: (u32, u32), to: (u32, u32)) {
    let m = minutes_of_day(t);
    assert!(
        m >= from.0 * 60 + from.1 && m <= to.0 * 60 + to.1,
        "{} not within {:02}:{:02}-{:02}:{:02}",
        t.format("%H:%M:%S"),
        from.0,
        from.1,
        to.0,
        to.1
    );
}

// =============================================================================
// SCHEDULE
// =============================================================================

#[test]
fn test_jakarta_reference_day() {
    let s = jakarta(date(2024, 3, 25));

    assert_within(s.fajr, (4, 35), (4, 45));
    assert_within(s.dhuhr, (11, 55), (12, 5));
    assert_within(s.asr, (15, 5), (15, 20));
    assert_within(s.maghrib, (17, 55), (18, 5));
    assert_within(s.isha, (19, 5), (19, 20));
}

#[test]
fn test_ordering_across_latitudes_methods_and_months() {
    for lat in [-45.0, -30.0, -15.0, 0.0, 15.0, 30.0, 45.0] {
        for lon in [-120.0, 0.0, 106.8] {
            let offset = hours((lon / 15.0_f64).round() as i32);
            for method in Method::ALL {
                for month in 1..=12 {
                    let d = date(2024, month, 15);
                    let s = compute_schedule(d, offset, Coordinate::new(lat, lon), method)
                        .unwrap_or_else(|e| panic!("{lat},{lon} {method} {d}: {e}"));

                    assert!(s.imsak <= s.fajr);
                    assert!(s.fajr < s.dhuhr, "{lat} {method} {d}");
                    assert!(s.dhuhr < s.asr, "{lat} {method} {d}");
                    assert!(s.asr < s.maghrib, "{lat} {method} {d}");
                    assert!(s.maghrib < s.isha, "{lat} {method} {d}");
                    assert_eq!(s.dhuhr.date_naive(), d);
                }
            }
        }
    }
}

#[test]
fn test_ordering_holds_at_high_latitudes_when_solvable() {
    let mut solved = 0;
    for lat in [48.0, 51.5, 55.0, 58.0, -52.0] {
        for method in Method::ALL {
            for month in 1..=12 {
                let d = date(2024, month, 21);
                let Ok(s) = compute_schedule(d, hours(1), Coordinate::new(lat, -0.1278), method) else {
                    continue;
                };
                solved += 1;
                assert!(s.imsak <= s.fajr);
                assert!(s.fajr < s.dhuhr, "{lat} {method} {d}");
                assert!(s.dhuhr < s.asr, "{lat} {method} {d}");
                assert!(s.asr < s.maghrib, "{lat} {method} {d}");
                assert!(s.maghrib < s.isha, "{lat} {method} {d}");
                assert!(s.isha - s.dhuhr < Duration::hours(24));
            }
        }
    }
    assert!(solved > 0);
}

#[test]
fn test_non_finite_longitude_is_rejected() {
    for lon in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = compute_schedule(date(2024, 3, 25), hours(7), Coordinate::new(0.0, lon), Method::Kemenag)
            .unwrap_err();
        assert_eq!(err.code(), "E002_NON_FINITE_INPUT");
    }
}

#[test]
fn test_imsak_is_exactly_ten_minutes_before_fajr() {
    for (lat, lon, tz) in [(-6.2, 106.8, 7), (40.71, -74.0, -5), (21.42, 39.83, 3), (-33.9, 151.2, 10)] {
        for method in Method::ALL {
            let s = compute_schedule(date(2024, 6, 1), hours(tz), Coordinate::new(lat, lon), method).unwrap();
            assert_eq!(s.fajr - s.imsak, Duration::minutes(10));
        }
    }
}

#[test]
fn test_deterministic() {
    let a = jakarta(date(2024, 7, 4));
    let b = jakarta(date(2024, 7, 4));
    assert_eq!(a, b);
}

#[test]
fn test_interval_method_isha_follows_maghrib() {
    let s = compute_schedule(date(2024, 3, 25), hours(3), Coordinate::new(21.4225, 39.8262), Method::Makkah).unwrap();
    let gap = (s.isha - s.maghrib).num_seconds();
    assert!((gap - 90 * 60).abs() <= 1, "gap {gap}s");
}

#[test]
fn test_unknown_method_matches_default_parameters() {
    let coord = Coordinate::new(-6.2, 106.8);
    let typo = compute_schedule(date(2024, 3, 25), hours(7), coord, MethodParams::for_name("Kemenaag")).unwrap();
    let default = compute_schedule(date(2024, 3, 25), hours(7), coord, MethodParams::DEFAULT).unwrap();
    assert_eq!(typo, default);
}

#[test]
fn test_polar_winter_fails_with_invalid_geometry() {
    let err = compute_schedule(date(2024, 12, 21), hours(1), Coordinate::new(80.0, 15.0), Method::Kemenag).unwrap_err();
    assert_eq!(err.code(), "E001_INVALID_GEOMETRY");
}

#[test]
fn test_builder_matches_compute_schedule() {
    let builder = ScheduleBuilder::new(Coordinate::new(-6.2, 106.8), Method::Kemenag).offset(hours(7));
    assert_eq!(builder.build(date(2024, 3, 25)).unwrap(), jakarta(date(2024, 3, 25)));
}

// =============================================================================
// PERIODS
// =============================================================================

#[test]
fn test_fajr_start_is_inclusive() {
    let s = jakarta(date(2024, 3, 25));
    assert_eq!(active_period(s.fajr, &s), Some(Prayer::Fajr));
}

#[test]
fn test_second_before_dhuhr_is_previous_period() {
    let s = jakarta(date(2024, 3, 25));
    assert_eq!(active_period(s.dhuhr - Duration::seconds(1), &s), Some(Prayer::Fajr));
    assert_eq!(active_period(s.dhuhr, &s), Some(Prayer::Dhuhr));
}

#[test]
fn test_before_imsak_has_no_active_period() {
    let s = jakarta(date(2024, 3, 25));
    assert_eq!(active_period(s.imsak - Duration::seconds(1), &s), None);

    let next = next_period(s.imsak - Duration::seconds(1), &s);
    assert_eq!(next.prayer, Prayer::Imsak);
    assert!(!next.wrapped_to_next_day);
}

#[test]
fn test_every_boundary_opens_its_own_period() {
    let s = jakarta(date(2024, 3, 25));
    for (prayer, t) in s.boundaries() {
        assert_eq!(active_period(t, &s), Some(prayer));
        assert_eq!(active_period(t + Duration::seconds(30), &s), Some(prayer));
    }
}

#[test]
fn test_next_is_never_now() {
    let s = jakarta(date(2024, 3, 25));
    let next = next_period(s.asr, &s);
    assert_eq!(next.prayer, Prayer::Maghrib);
    assert_eq!(next.time, s.maghrib);
}

#[test]
fn test_rollover_after_isha() {
    let s = jakarta(date(2024, 3, 25));
    let now = s.isha + Duration::seconds(1);

    assert_eq!(active_period(now, &s), Some(Prayer::Isha));

    let next = next_period(now, &s);
    assert_eq!(next.prayer, Prayer::Imsak);
    assert!(next.wrapped_to_next_day);
    assert_eq!(next.time - s.imsak, Duration::hours(24));
    assert_eq!(next.time.day(), 26);
    assert_eq!(next.label(), "Imsak (tomorrow)");
}

/// London summer, ISNA at +01:00: Isha falls after midnight (about 00:49)
fn london_midsummer() -> Schedule {
    compute_schedule(date(2024, 6, 21), hours(1), Coordinate::new(51.5074, -0.1278), Method::Isna).unwrap()
}

#[test]
fn test_isha_after_midnight_lands_on_next_day() {
    let s = london_midsummer();

    assert_eq!(s.date, date(2024, 6, 21));
    assert_eq!(s.isha.date_naive(), date(2024, 6, 22));
    assert!(s.isha.hour() < 2, "isha {}", s.isha);
    assert_eq!(s.imsak.date_naive(), date(2024, 6, 21));
    assert!(s.maghrib < s.isha);
}

#[test]
fn test_isha_after_midnight_periods() {
    let s = london_midsummer();

    // late evening is still Maghrib, with Isha ahead the same night
    let late = s.maghrib + Duration::hours(2);
    assert_eq!(active_period(late, &s), Some(Prayer::Maghrib));
    let next = next_period(late, &s);
    assert_eq!(next.prayer, Prayer::Isha);
    assert_eq!(next.time, s.isha);
    assert!(!next.wrapped_to_next_day);

    // Isha runs until the next day's Imsak
    assert_eq!(active_period(s.isha, &s), Some(Prayer::Isha));
    let next = next_period(s.isha + Duration::seconds(1), &s);
    assert_eq!(next.prayer, Prayer::Imsak);
    assert!(next.wrapped_to_next_day);
    assert_eq!(next.time, s.imsak + Duration::hours(24));

    // early hours of the schedule's own date, before Imsak
    assert_eq!(active_period(s.imsak - Duration::minutes(5), &s), None);
}

// =============================================================================
// WATCH
// =============================================================================

#[test]
fn test_watch_reports_each_period_once_through_the_day() {
    let builder = ScheduleBuilder::new(Coordinate::new(-6.2, 106.8), Method::Kemenag).offset(hours(7));
    let s = builder.build(date(2024, 3, 25)).unwrap();
    let mut engine = WatchEngine::new(builder, "Kemenag");

    let start = s.imsak - Duration::minutes(5);
    let mut entered = Vec::new();
    let mut t = start;
    while t < s.isha + Duration::minutes(5) {
        let tick = engine.update(&t).unwrap();
        if let Some(p) = tick.entered {
            entered.push(p);
        }
        assert!((0.0..=1.0).contains(&tick.progress));
        t += Duration::minutes(1);
    }

    assert_eq!(entered, Prayer::ALL.to_vec());
}
