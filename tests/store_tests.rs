// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use cashcal::db;
use cashcal::form::TransactionForm;
use cashcal::store::{
    KeyValueStore, MemoryStore, SqliteStore, StoreError, TRANSACTIONS_KEY, load_transactions,
    save_transactions, set_starting_balance, set_viewed_month, starting_balance,
    try_load_transactions, viewed_month,
};
use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Read {
            key: key.to_string(),
            source: "disk unplugged".into(),
        })
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Write {
            key: key.to_string(),
            source: "disk unplugged".into(),
        })
    }
}

#[test]
fn sqlite_round_trip_is_field_for_field() {
    let conn = setup();
    let store = SqliteStore::new(&conn);
    let txs = vec![
        TransactionForm::new("Paycheck", "2024-01-05", "1000")
            .validate()
            .unwrap(),
        TransactionForm::new("Coffee", "2024-01-05", "-3.75")
            .validate()
            .unwrap(),
    ];
    save_transactions(&store, &txs).unwrap();
    assert_eq!(load_transactions(&store), txs);

    // a second save replaces the whole collection
    save_transactions(&store, &txs[..1]).unwrap();
    assert_eq!(try_load_transactions(&store).unwrap(), txs[..1].to_vec());
}

#[test]
fn memory_round_trip() {
    let store = MemoryStore::new();
    assert!(load_transactions(&store).is_empty());
    let txs = vec![
        TransactionForm::new("Rent", "2024-03-01", "-1200")
            .validate()
            .unwrap(),
    ];
    save_transactions(&store, &txs).unwrap();
    assert_eq!(load_transactions(&store), txs);
}

#[test]
fn malformed_json_loads_as_empty() {
    let store = MemoryStore::new();
    store.set(TRANSACTIONS_KEY, "{not json").unwrap();
    assert!(load_transactions(&store).is_empty());
    assert!(matches!(
        try_load_transactions(&store),
        Err(StoreError::Malformed { .. })
    ));

    store.set(TRANSACTIONS_KEY, r#"{"title":"not a list"}"#).unwrap();
    assert!(load_transactions(&store).is_empty());
}

#[test]
fn read_failure_loads_as_empty() {
    assert!(load_transactions(&BrokenStore).is_empty());
    assert!(matches!(
        try_load_transactions(&BrokenStore),
        Err(StoreError::Read { .. })
    ));
    assert!(save_transactions(&BrokenStore, &[]).is_err());
}

#[test]
fn numeric_amounts_are_accepted() {
    let store = MemoryStore::new();
    store
        .set(
            TRANSACTIONS_KEY,
            r#"[{"id":"1","title":"Gift","date":"2024-05-02","amount":25.5,"createdAt":"2024-05-01T10:00:00Z"}]"#,
        )
        .unwrap();
    let txs = load_transactions(&store);
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].amount, "25.5".parse::<Decimal>().unwrap());
    assert_eq!(txs[0].date, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
}

#[test]
fn settings_default_and_persist() {
    let conn = setup();
    let store = SqliteStore::new(&conn);
    assert_eq!(starting_balance(&store).unwrap(), Decimal::ZERO);
    assert_eq!(viewed_month(&store).unwrap(), None);

    set_starting_balance(&store, "250.75".parse().unwrap()).unwrap();
    set_viewed_month(&store, NaiveDate::from_ymd_opt(2024, 2, 17).unwrap()).unwrap();
    assert_eq!(
        starting_balance(&store).unwrap(),
        "250.75".parse::<Decimal>().unwrap()
    );
    assert_eq!(
        viewed_month(&store).unwrap(),
        NaiveDate::from_ymd_opt(2024, 2, 1)
    );

    store.set("starting_balance", "lots").unwrap();
    assert_eq!(starting_balance(&store).unwrap(), Decimal::ZERO);
}
