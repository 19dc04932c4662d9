// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::project::{query_events, range};
use crate::dates::today;
use crate::state::Controller;
use crate::store::SqliteStore;
use crate::utils::{arg, fmt_amount};
use anyhow::{Context, Result, bail};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(conn, sub),
        Some(("events", sub)) => export_events(conn, sub),
        _ => Ok(()),
    }
}

fn format_of(sub: &clap::ArgMatches) -> Result<String> {
    let fmt = arg(sub, "format")?.trim().to_lowercase();
    match fmt.as_str() {
        "csv" | "json" => Ok(fmt),
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
}

fn export_transactions(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = format_of(sub)?;
    let out = arg(sub, "out")?.trim();

    let controller = Controller::load(SqliteStore::new(conn), today());
    let mut txs = controller.transactions().to_vec();
    txs.sort_by_key(|t| t.date);

    if fmt == "csv" {
        let mut wtr = csv::Writer::from_path(out).with_context(|| format!("Create {}", out))?;
        wtr.write_record(["id", "date", "title", "amount", "created_at"])?;
        for t in &txs {
            wtr.write_record([
                t.id.clone(),
                t.date.to_string(),
                t.title.clone(),
                t.amount.to_string(),
                t.created_at.to_rfc3339(),
            ])?;
        }
        wtr.flush()?;
    } else {
        std::fs::write(out, serde_json::to_string_pretty(&txs)?)
            .with_context(|| format!("Write {}", out))?;
    }
    println!("Exported {} transactions to {}", txs.len(), out);
    Ok(())
}

fn export_events(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = format_of(sub)?;
    let out = arg(sub, "out")?.trim();
    let (start, end) = range(sub, today())?;
    let events = query_events(conn, start, end)?;

    if fmt == "csv" {
        let mut wtr = csv::Writer::from_path(out).with_context(|| format!("Create {}", out))?;
        wtr.write_record(["date", "title", "description", "running_balance", "color"])?;
        for e in &events {
            wtr.write_record([
                e.date.to_string(),
                e.title.clone().unwrap_or_default(),
                e.description.clone(),
                fmt_amount(&e.running_balance),
                e.color.hex().to_string(),
            ])?;
        }
        wtr.flush()?;
    } else {
        std::fs::write(out, serde_json::to_string_pretty(&events)?)
            .with_context(|| format!("Write {}", out))?;
    }
    println!("Exported {} events to {}", events.len(), out);
    Ok(())
}
