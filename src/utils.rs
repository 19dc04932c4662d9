// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::{Decimal, RoundingStrategy};

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_month(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Two decimal places, halves rounded away from zero (1.999 -> "2.00",
/// 0.125 -> "0.13"). All amount and balance output goes through here.
pub fn fmt_amount(d: &Decimal) -> String {
    let rounded = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

pub fn fmt_money(d: &Decimal) -> String {
    if *d < Decimal::ZERO {
        format!("-${}", fmt_amount(&d.abs()))
    } else {
        format!("${}", fmt_amount(d))
    }
}

/// A required clap argument, as an error instead of a panic when missing.
pub fn arg<'a>(m: &'a clap::ArgMatches, name: &str) -> Result<&'a String> {
    m.get_one::<String>(name)
        .ok_or_else(|| anyhow!("Missing required argument '{}'", name))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

/// Prints `v` as JSON when asked to and reports whether it did. With
/// `--jsonl` a top-level array is written one element per line.
pub fn maybe_print_json<T: serde::Serialize>(pretty: bool, lines: bool, v: &T) -> Result<bool> {
    if !pretty && !lines {
        return Ok(false);
    }
    if pretty {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    match serde_json::to_value(v)? {
        serde_json::Value::Array(items) => {
            for item in &items {
                println!("{}", serde_json::to_string(item)?);
            }
        }
        other => println!("{}", serde_json::to_string(&other)?),
    }
    Ok(true)
}
