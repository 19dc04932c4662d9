// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::dates::{end_of_year, today};
use crate::models::DailyEvent;
use crate::state::Controller;
use crate::store::SqliteStore;
use crate::utils::{fmt_money, maybe_print_json, parse_date, pretty_table};
use anyhow::{Result, bail};
use chrono::NaiveDate;
use rusqlite::Connection;

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (start, end) = range(sub, today())?;
    let events = query_events(conn, start, end)?;
    if !maybe_print_json(json_flag, jsonl_flag, &events)? {
        let rows: Vec<Vec<String>> = events
            .iter()
            .map(|e| {
                vec![
                    e.date.to_string(),
                    e.title.clone().unwrap_or_default(),
                    e.description.clone(),
                    fmt_money(&e.running_balance),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Title", "Description", "Balance"], rows)
        );
    }
    Ok(())
}

/// `--from`/`--to` with defaults of today and December 31st of the start
/// year.
pub fn range(sub: &clap::ArgMatches, today: NaiveDate) -> Result<(NaiveDate, NaiveDate)> {
    let start = match sub.get_one::<String>("from") {
        Some(s) => parse_date(s)?,
        None => today,
    };
    let end = match sub.get_one::<String>("to") {
        Some(s) => parse_date(s)?,
        None => end_of_year(start),
    };
    if end < start {
        bail!("--to {} is before --from {}", end, start);
    }
    Ok((start, end))
}

pub fn query_events(conn: &Connection, start: NaiveDate, end: NaiveDate) -> Result<Vec<DailyEvent>> {
    let controller = Controller::load(SqliteStore::new(conn), today());
    Ok(controller.events(start, end))
}
