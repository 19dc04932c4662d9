// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::dates::today;
use crate::form::TransactionForm;
use crate::models::Transaction;
use crate::state::Controller;
use crate::store::SqliteStore;
use crate::utils::{arg, fmt_amount, fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let form = TransactionForm::new(
        arg(sub, "title")?.as_str(),
        arg(sub, "date")?.as_str(),
        arg(sub, "amount")?.as_str(),
    );
    let tx = record(conn, &form)?;
    println!(
        "Recorded '{}' {} on {}",
        tx.title,
        fmt_money(&tx.amount),
        tx.date
    );
    Ok(())
}

/// Validates the form and appends the transaction. A rejected form leaves
/// the stored collection untouched.
pub fn record(conn: &Connection, form: &TransactionForm) -> Result<Transaction> {
    let tx = form.validate()?;
    let mut controller = Controller::load(SqliteStore::new(conn), today());
    controller.add_transaction(tx.clone())?;
    Ok(tx)
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.title.clone(),
                    r.amount.clone(),
                    r.id.clone(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Date", "Title", "Amount", "Id"], rows));
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub title: String,
    pub amount: String,
    pub created_at: String,
}

/// Stored transactions in date order; same-day entries keep insertion order.
pub fn query_rows(conn: &Connection) -> Result<Vec<TransactionRow>> {
    let controller = Controller::load(SqliteStore::new(conn), today());
    let mut txs: Vec<&Transaction> = controller.transactions().iter().collect();
    txs.sort_by_key(|t| t.date);
    Ok(txs
        .into_iter()
        .map(|t| TransactionRow {
            id: t.id.clone(),
            date: t.date.to_string(),
            title: t.title.clone(),
            amount: fmt_amount(&t.amount),
            created_at: t.created_at.to_rfc3339(),
        })
        .collect())
}
