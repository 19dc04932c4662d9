// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use cashcal::dates::*;
use chrono::{Datelike, NaiveDate};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn add_months_clamps_to_last_day_of_target_month() {
    assert_eq!(add_months(ymd(2024, 1, 31), 1), ymd(2024, 2, 29));
    assert_eq!(add_months(ymd(2023, 1, 31), 1), ymd(2023, 2, 28));
    assert_eq!(add_months(ymd(2024, 3, 31), 1), ymd(2024, 4, 30));
    assert_eq!(add_months(ymd(2024, 12, 15), 1), ymd(2025, 1, 15));
    assert_eq!(sub_months(ymd(2024, 3, 31), 1), ymd(2024, 2, 29));
    assert_eq!(sub_months(ymd(2024, 1, 10), 1), ymd(2023, 12, 10));
    assert_eq!(add_months(ymd(2024, 5, 20), -2), ymd(2024, 3, 20));
}

#[test]
fn add_days_rolls_over_months_and_years() {
    assert_eq!(add_days(ymd(2023, 12, 31), 1), ymd(2024, 1, 1));
    assert_eq!(add_days(ymd(2024, 2, 28), 1), ymd(2024, 2, 29));
    assert_eq!(add_days(ymd(2024, 3, 1), -1), ymd(2024, 2, 29));
    assert_eq!(sub_days(ymd(2024, 1, 1), 1), ymd(2023, 12, 31));
    assert_eq!(add_days(NaiveDate::MAX, 1), NaiveDate::MAX);
    assert_eq!(sub_days(NaiveDate::MIN, 1), NaiveDate::MIN);
}

#[test]
fn compare_and_weekday() {
    assert!(compare(ymd(2024, 1, 1), ymd(2024, 1, 2)) < 0);
    assert_eq!(compare(ymd(2024, 1, 2), ymd(2024, 1, 2)), 0);
    assert!(compare(ymd(2024, 1, 3), ymd(2024, 1, 2)) > 0);

    assert_eq!(day_of_week(ymd(2024, 1, 1)), 1); // Monday
    assert_eq!(day_of_week(ymd(2024, 2, 1)), 4); // Thursday
    assert_eq!(day_of_week(ymd(2024, 3, 31)), 7); // Sunday
}

#[test]
fn month_bounds() {
    assert_eq!(days_in_month(ymd(2024, 2, 10)), 29);
    assert_eq!(days_in_month(ymd(2023, 2, 10)), 28);
    assert_eq!(days_in_month(ymd(1900, 2, 1)), 28);
    assert_eq!(days_in_month(ymd(2000, 2, 1)), 29);
    assert_eq!(days_in_month(ymd(2024, 4, 1)), 30);
    assert_eq!(days_in_month(ymd(2024, 12, 1)), 31);

    assert_eq!(first_of_month(ymd(2024, 2, 17)), ymd(2024, 2, 1));
    assert_eq!(last_of_month(ymd(2024, 2, 17)), ymd(2024, 2, 29));
    assert_eq!(end_of_year(ymd(2024, 2, 17)), ymd(2024, 12, 31));
}

#[test]
fn iso_strings_and_month_keys() {
    assert_eq!(to_iso_date_string(ymd(2024, 1, 5)), "2024-01-05");
    assert_eq!(parse_iso_date(" 2024-01-05 "), Some(ymd(2024, 1, 5)));
    assert_eq!(parse_iso_date("2024-02-30"), None);
    assert_eq!(parse_iso_date("not a date"), None);
    assert_eq!(month_key(ymd(2024, 7, 19)), "2024-07");
    assert_eq!(parse_month_key("2024-07"), Some(ymd(2024, 7, 1)));
    assert_eq!(parse_month_key("2024-13"), None);
}

#[test]
fn month_ends_come_from_the_calendar() {
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(is_leap_year(2000));
    assert_eq!(last_of_month(ymd(2023, 12, 5)), ymd(2023, 12, 31));
    assert_eq!(last_of_month(ymd(2023, 11, 5)), ymd(2023, 11, 30));
    assert_eq!(last_of_month(NaiveDate::MAX), NaiveDate::MAX);
    let feb_of_last_year = NaiveDate::from_ymd_opt(NaiveDate::MAX.year(), 2, 1).unwrap();
    assert_eq!(
        days_in_month(feb_of_last_year),
        if is_leap_year(NaiveDate::MAX.year()) { 29 } else { 28 }
    );
}
