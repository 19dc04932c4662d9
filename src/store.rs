// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Key-value persistence for the transaction collection and settings.
//!
//! The collection is always written whole under [`TRANSACTIONS_KEY`].

use crate::dates::{month_key, parse_month_key};
use crate::models::Transaction;
use chrono::NaiveDate;
use log::{error, warn};
use rusqlite::{Connection, OptionalExtension, params};
use rust_decimal::Decimal;
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

pub const TRANSACTIONS_KEY: &str = "transactions";
pub const STARTING_BALANCE_KEY: &str = "starting_balance";
pub const VIEWED_MONTH_KEY: &str = "viewed_month";

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read '{key}': {source}")]
    Read { key: String, source: BoxError },
    #[error("failed to write '{key}': {source}")]
    Write { key: String, source: BoxError },
    #[error("malformed value under '{key}': {source}")]
    Malformed {
        key: String,
        source: serde_json::Error,
    },
    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Store backed by the `settings(key, value)` table.
pub struct SqliteStore<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueStore for SqliteStore<'_> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.conn
            .query_row(
                "SELECT value FROM settings WHERE key=?1",
                params![key],
                |r| r.get(0),
            )
            .optional()
            .map_err(|e| StoreError::Read {
                key: key.to_string(),
                source: Box::new(e),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn
            .execute(
                "INSERT INTO settings(key, value) VALUES(?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value=excluded.value",
                params![key, value],
            )
            .map(|_| ())
            .map_err(|e| StoreError::Write {
                key: key.to_string(),
                source: Box::new(e),
            })
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Strict load: absence is an empty collection, anything else that goes
/// wrong is an error.
pub fn try_load_transactions<S: KeyValueStore + ?Sized>(
    store: &S,
) -> Result<Vec<Transaction>, StoreError> {
    match store.get(TRANSACTIONS_KEY)? {
        None => Ok(Vec::new()),
        Some(raw) if raw.trim().is_empty() => Ok(Vec::new()),
        Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
            key: TRANSACTIONS_KEY.to_string(),
            source,
        }),
    }
}

/// Tolerant load used at startup: read failures and malformed content are
/// logged and yield an empty collection.
pub fn load_transactions<S: KeyValueStore + ?Sized>(store: &S) -> Vec<Transaction> {
    match try_load_transactions(store) {
        Ok(txs) => txs,
        Err(e @ StoreError::Malformed { .. }) => {
            warn!("ignoring stored transactions: {}", e);
            Vec::new()
        }
        Err(e) => {
            error!("could not load transactions: {}", e);
            Vec::new()
        }
    }
}

pub fn save_transactions<S: KeyValueStore + ?Sized>(
    store: &S,
    transactions: &[Transaction],
) -> Result<(), StoreError> {
    let raw = serde_json::to_string_pretty(transactions)?;
    store.set(TRANSACTIONS_KEY, &raw)
}

/// Opening balance for projections; unset or unparsable values read as zero.
pub fn starting_balance<S: KeyValueStore + ?Sized>(store: &S) -> Result<Decimal, StoreError> {
    let raw = store.get(STARTING_BALANCE_KEY)?;
    Ok(match raw {
        Some(s) => s.trim().parse::<Decimal>().unwrap_or_else(|_| {
            warn!("invalid {} '{}', using 0", STARTING_BALANCE_KEY, s);
            Decimal::ZERO
        }),
        None => Decimal::ZERO,
    })
}

pub fn set_starting_balance<S: KeyValueStore + ?Sized>(
    store: &S,
    amount: Decimal,
) -> Result<(), StoreError> {
    store.set(STARTING_BALANCE_KEY, &amount.to_string())
}

pub fn viewed_month<S: KeyValueStore + ?Sized>(
    store: &S,
) -> Result<Option<NaiveDate>, StoreError> {
    Ok(store
        .get(VIEWED_MONTH_KEY)?
        .and_then(|s| parse_month_key(&s)))
}

pub fn set_viewed_month<S: KeyValueStore + ?Sized>(
    store: &S,
    viewed: NaiveDate,
) -> Result<(), StoreError> {
    store.set(VIEWED_MONTH_KEY, &month_key(viewed))
}
