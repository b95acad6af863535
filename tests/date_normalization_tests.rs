// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tests for date argument normalization as a request handler sees it

use chrono::{Datelike, NaiveDate, TimeZone, Utc, Weekday};
use recordkit::{iso_to_date, with_date_normalization, DateArgumentError, DateArguments};

struct Calendar {
    name: &'static str,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn day_view(calendar: &Calendar, day: NaiveDate) -> String {
    format!("{}: {}", calendar.name, day.format("%A %d %B %Y"))
}

#[test]
fn test_handler_receives_one_date_for_each_form() {
    let handler = with_date_normalization(day_view);
    let calendar = Calendar { name: "events" };
    let today = date(2025, 10, 19);
    let new_years_eve = Utc.with_ymd_and_hms(2024, 12, 31, 23, 30, 0).unwrap();

    let cases = [
        (DateArguments::new(), "events: Sunday 19 October 2025"),
        (
            DateArguments::new().year(1993).month(2).day(13),
            "events: Saturday 13 February 1993",
        ),
        (
            DateArguments::new().year(1993).month(2),
            "events: Monday 01 February 1993",
        ),
        (
            DateArguments::new().year(1993).week(6).weekday(6),
            "events: Saturday 13 February 1993",
        ),
        (
            DateArguments::new().year(1993).week(6),
            "events: Monday 08 February 1993",
        ),
        (
            DateArguments::new().start(date(2024, 2, 29)),
            "events: Thursday 29 February 2024",
        ),
        (
            DateArguments::new().start(new_years_eve),
            "events: Tuesday 31 December 2024",
        ),
    ];

    for (args, expected) in cases {
        assert_eq!(
            handler.call_on(&calendar, &args, today).unwrap(),
            expected,
            "{:?}",
            args.given()
        );
    }
}

#[test]
fn test_handler_not_invoked_on_bad_arguments() {
    let calls = std::cell::Cell::new(0);
    let handler = with_date_normalization(|_: &(), day: NaiveDate| {
        calls.set(calls.get() + 1);
        day
    });

    let mixed = DateArguments::new().year(1993).day(13);
    match handler.call(&(), &mixed) {
        Err(DateArgumentError::InvalidArgumentCombination { given }) => {
            assert_eq!(given, "year, day")
        }
        other => panic!("Expected invalid combination, got {other:?}"),
    }

    let impossible = DateArguments::new().year(2025).month(2).day(30);
    assert_eq!(
        handler.call(&(), &impossible),
        Err(DateArgumentError::invalid_date(2025, 2, 30))
    );

    let over_specified = DateArguments::new().start(date(2025, 1, 1)).year(2025);
    assert!(handler.call(&(), &over_specified).is_err());

    assert_eq!(calls.get(), 0);
    assert!(handler.call(&(), &DateArguments::new()).is_ok());
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_url_segments_round_into_dates() {
    let today = date(2025, 10, 19);

    let segments = [("year", "2020"), ("week", "53"), ("weekday", "5")];
    let args = DateArguments::from_segments(segments).unwrap();
    assert_eq!(args.normalize_on(today).unwrap(), date(2021, 1, 1));

    let segments = [("year", "2025"), ("month", "3"), ("day", "")];
    let args = DateArguments::from_segments(segments).unwrap();
    assert_eq!(args.normalize_on(today).unwrap(), date(2025, 3, 1));

    assert_eq!(
        DateArguments::from_segments([("year", "twenty")]),
        Err(DateArgumentError::invalid_argument("year", "twenty"))
    );
    assert!(DateArguments::from_segments([("fortnight", "2")]).is_err());
}

#[test]
fn test_iso_weeks_start_on_monday_across_years() {
    for year in [1970, 1993, 2004, 2020, 2021, 2026] {
        let monday = iso_to_date(year, 1, 1).unwrap();
        assert_eq!(monday.weekday(), Weekday::Mon);

        let iso = monday.iso_week();
        assert_eq!((iso.year(), iso.week()), (year, 1));
    }
}
