// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::dates::month_key;
use crate::form::{ValidationError, within_amount_limit};
use crate::store::{SqliteStore, set_starting_balance, starting_balance, viewed_month};
use crate::utils::{arg, fmt_money, parse_decimal, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let store = SqliteStore::new(conn);
    match m.subcommand() {
        Some(("show", _)) => {
            let rows = vec![
                vec![
                    "database".to_string(),
                    crate::db::db_path()?.display().to_string(),
                ],
                vec![
                    "starting_balance".to_string(),
                    fmt_money(&starting_balance(&store)?),
                ],
                vec![
                    "viewed_month".to_string(),
                    viewed_month(&store)?
                        .map(month_key)
                        .unwrap_or_else(|| "(current)".to_string()),
                ],
            ];
            println!("{}", pretty_table(&["Setting", "Value"], rows));
        }
        Some(("set-balance", sub)) => {
            let raw = arg(sub, "amount")?;
            let amount = parse_decimal(raw)?;
            if !within_amount_limit(&amount) {
                return Err(ValidationError::InvalidAmount(raw.trim().to_string()).into());
            }
            set_starting_balance(&store, amount)?;
            println!("Starting balance set to {}", fmt_money(&amount));
        }
        _ => {}
    }
    Ok(())
}
