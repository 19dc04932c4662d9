// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::dates::today;
use crate::form::TransactionForm;
use crate::state::Controller;
use crate::store::SqliteStore;
use crate::utils::arg;
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use log::info;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => {
            let path = arg(sub, "path")?.trim();
            let n = import_transactions(conn, path)?;
            println!("Imported {} transactions from {}", n, path);
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Reads `title,date,amount` rows. Every row must pass entry validation;
/// otherwise nothing is imported.
pub fn import_transactions(conn: &Connection, path: &str) -> Result<usize> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let mut imported = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let line = i + 2;
        let rec = result.with_context(|| format!("Read CSV line {}", line))?;
        let form = TransactionForm::new(
            rec.get(0).unwrap_or(""),
            rec.get(1).unwrap_or(""),
            rec.get(2).unwrap_or(""),
        );
        let tx = form
            .validate()
            .with_context(|| format!("Line {}: rejected", line))?;
        imported.push(tx);
    }

    let count = imported.len();
    if count > 0 {
        let mut controller = Controller::load(SqliteStore::new(conn), today());
        let mut all = controller.transactions().to_vec();
        all.extend(imported);
        controller.replace_transactions(all);
    }
    info!("imported {} transactions from {}", count, path);
    Ok(count)
}
