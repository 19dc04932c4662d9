// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Monday-first month grid and the per-day join with projected events.

use crate::dates::{
    add_days, add_months, day_of_week, days_in_month, first_of_month, last_of_month, sub_months,
};
use crate::models::{CalendarCell, DailyEvent, DayView};
use chrono::{Datelike, NaiveDate};
use log::debug;
use rust_decimal::Decimal;

pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Cells for the month containing `viewed`: trailing days of the previous
/// month back to Monday, every day of the month, then leading days of the
/// next month up to Sunday. Always a multiple of 7.
pub fn build_month_grid(viewed: NaiveDate) -> Vec<CalendarCell> {
    let first = first_of_month(viewed);
    let last = last_of_month(viewed);
    let leading = (day_of_week(first) - 1) as i64;
    let trailing = (7 - day_of_week(last)) as i64;
    let in_month = days_in_month(viewed) as i64;

    let mut cells = Vec::with_capacity((leading + in_month + trailing) as usize);
    for i in (1..=leading).rev() {
        cells.push(CalendarCell {
            date: add_days(first, -i),
            in_month: false,
        });
    }
    for i in 0..in_month {
        cells.push(CalendarCell {
            date: add_days(first, i),
            in_month: true,
        });
    }
    for i in 1..=trailing {
        cells.push(CalendarCell {
            date: add_days(last, i),
            in_month: false,
        });
    }

    debug!(
        "grid for {}: {} leading, {} days, {} trailing",
        month_label(viewed),
        leading,
        in_month,
        trailing
    );
    cells
}

/// Events falling on the cell's date; the balance is the last one's running
/// balance, or zero when the day is outside the projected range.
pub fn resolve_day<'a>(cell: &CalendarCell, events: &'a [DailyEvent]) -> DayView<'a> {
    let items: Vec<&DailyEvent> = events.iter().filter(|e| e.date == cell.date).collect();
    let balance = items
        .last()
        .map(|e| e.running_balance)
        .unwrap_or(Decimal::ZERO);
    DayView {
        date: cell.date,
        balance,
        items,
    }
}

pub fn month_label(date: NaiveDate) -> String {
    format!("{} {}", MONTH_NAMES[date.month0() as usize], date.year())
}

/// The viewed-month cursor. Navigation never mutates; it returns the next
/// cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewCursor {
    pub viewed: NaiveDate,
}

impl ViewCursor {
    pub fn new(viewed: NaiveDate) -> Self {
        Self { viewed }
    }

    pub fn previous_month(self) -> Self {
        Self::new(sub_months(self.viewed, 1))
    }

    pub fn next_month(self) -> Self {
        Self::new(add_months(self.viewed, 1))
    }

    pub fn jump_to_today(self, today: NaiveDate) -> Self {
        Self::new(today)
    }

    pub fn grid(&self) -> Vec<CalendarCell> {
        build_month_grid(self.viewed)
    }

    pub fn label(&self) -> String {
        month_label(self.viewed)
    }
}
