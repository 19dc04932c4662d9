// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::form::MAX_TITLE_LEN;
use crate::store::{SqliteStore, StoreError, try_load_transactions};
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;
use std::collections::HashSet;

pub fn handle(conn: &Connection) -> Result<()> {
    let rows = diagnose(conn)?;
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

/// `[issue, detail]` pairs for problems in the stored collection.
pub fn diagnose(conn: &Connection) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();

    let txs = match try_load_transactions(&SqliteStore::new(conn)) {
        Ok(txs) => txs,
        Err(e @ StoreError::Malformed { .. }) => {
            rows.push(vec!["malformed_store".into(), e.to_string()]);
            return Ok(rows);
        }
        Err(e) => return Err(e.into()),
    };

    let mut seen = HashSet::new();
    for t in &txs {
        if !seen.insert(t.id.as_str()) {
            rows.push(vec!["duplicate_id".into(), t.id.clone()]);
        }
        let title = t.title.trim();
        if title.is_empty() {
            rows.push(vec!["empty_title".into(), format!("{} {}", t.date, t.id)]);
        } else if t.title.chars().count() > MAX_TITLE_LEN {
            rows.push(vec!["title_too_long".into(), format!("{} {}", t.date, t.id)]);
        }
    }
    Ok(rows)
}
