// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::dates::today;
use crate::grid::WEEKDAYS;
use crate::models::{CalendarCell, DailyEvent, DayView};
use crate::state::{Controller, MonthView};
use crate::store::SqliteStore;
use crate::utils::{fmt_amount, fmt_money, maybe_print_json, parse_month, pretty_table};
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use rusqlite::Connection;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    if let Some((action, sub)) = m.subcommand() {
        let today = today();
        let view = navigate(conn, action, sub, today)?;
        let json_flag = sub.get_flag("json");
        let jsonl_flag = sub.get_flag("jsonl");
        if !maybe_print_json(json_flag, jsonl_flag, &day_rows(&view))? {
            println!("{}", view.label);
            println!("{}", render(&view));
        }
    }
    Ok(())
}

/// Applies a navigation action to the stored cursor and builds the
/// resulting month.
pub fn navigate(
    conn: &Connection,
    action: &str,
    sub: &clap::ArgMatches,
    today: NaiveDate,
) -> Result<MonthView> {
    let mut controller = Controller::load(SqliteStore::new(conn), today);
    match action {
        "prev" => controller.previous_month(),
        "next" => controller.next_month(),
        "today" => controller.jump_to_today(today),
        "show" => {
            if let Some(month) = sub.get_one::<String>("month") {
                controller.go_to_month(parse_month(month)?);
            }
        }
        _ => {}
    }
    Ok(controller.month_view(today))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRow<'a> {
    pub date: NaiveDate,
    pub in_month: bool,
    pub is_today: bool,
    pub balance: String,
    pub items: Vec<&'a DailyEvent>,
}

pub fn day_rows(view: &MonthView) -> Vec<DayRow<'_>> {
    view.days()
        .into_iter()
        .map(|(cell, day)| DayRow {
            date: cell.date,
            in_month: cell.in_month,
            is_today: cell.date == view.today,
            balance: fmt_amount(&day.balance),
            items: day.items,
        })
        .collect()
}

fn cell_text(cell: &CalendarCell, day: &DayView<'_>, today: NaiveDate) -> String {
    let mut label = if cell.in_month {
        cell.date.day().to_string()
    } else {
        format!("({})", cell.date.day())
    };
    if cell.date == today {
        label.push('*');
    }
    let mut lines = vec![label, format!("Balance: {}", fmt_money(&day.balance))];
    for item in &day.items {
        if let Some(title) = &item.title {
            lines.push(title.clone());
            lines.push(format!("  {}", item.description));
        }
    }
    lines.join("\n")
}

pub fn render(view: &MonthView) -> comfy_table::Table {
    let rows: Vec<Vec<String>> = view
        .weeks()
        .iter()
        .map(|week| {
            week.iter()
                .map(|(cell, day)| cell_text(cell, day, view.today))
                .collect()
        })
        .collect();
    pretty_table(&WEEKDAYS, rows)
}
