// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Calendar-safe arithmetic over plain (zone-less) dates.
//!
//! Every function is total: arithmetic that would leave chrono's
//! representable range saturates at `NaiveDate::MIN` / `NaiveDate::MAX`.

use chrono::{Datelike, Days, Local, Months, NaiveDate};
use std::cmp::Ordering;

pub fn add_days(date: NaiveDate, n: i64) -> NaiveDate {
    if n >= 0 {
        date.checked_add_days(Days::new(n as u64))
            .unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_days(Days::new(n.unsigned_abs()))
            .unwrap_or(NaiveDate::MIN)
    }
}

pub fn sub_days(date: NaiveDate, n: i64) -> NaiveDate {
    match n.checked_neg() {
        Some(neg) => add_days(date, neg),
        None => NaiveDate::MAX,
    }
}

/// Shift by whole months. When the day-of-month does not exist in the
/// target month the result is that month's last day (Jan 31 + 1 month =
/// Feb 28/29).
pub fn add_months(date: NaiveDate, n: i32) -> NaiveDate {
    if n >= 0 {
        date.checked_add_months(Months::new(n as u32))
            .unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_months(Months::new(n.unsigned_abs()))
            .unwrap_or(NaiveDate::MIN)
    }
}

pub fn sub_months(date: NaiveDate, n: i32) -> NaiveDate {
    match n.checked_neg() {
        Some(neg) => add_months(date, neg),
        None => NaiveDate::MAX,
    }
}

/// Negative when `a` is before `b`, zero when equal, positive after.
pub fn compare(a: NaiveDate, b: NaiveDate) -> i32 {
    match a.cmp(&b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// ISO weekday number: 1 = Monday .. 7 = Sunday.
pub fn day_of_week(date: NaiveDate) -> u32 {
    date.weekday().number_from_monday()
}

pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

pub fn days_in_month(date: NaiveDate) -> u32 {
    last_of_month(date).day()
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// The day before the first of the next month. December always ends on
/// the 31st, which also covers the last representable year.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    let next_first = match date.month() {
        12 => None,
        m => NaiveDate::from_ymd_opt(date.year(), m + 1, 1),
    };
    next_first
        .and_then(|d| d.pred_opt())
        .or_else(|| date.with_day(31))
        .unwrap_or(date)
}

/// December 31st of the date's year.
pub fn end_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date)
}

pub fn to_iso_date_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// `YYYY-MM` key used to persist the viewed month.
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

pub fn parse_month_key(s: &str) -> Option<NaiveDate> {
    parse_iso_date(&format!("{}-01", s.trim()))
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
