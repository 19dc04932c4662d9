// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Top-level application state: the transaction collection and the
//! viewed-month cursor, with change notification and write-through
//! persistence.

use crate::dates::end_of_year;
use crate::grid::{ViewCursor, resolve_day};
use crate::models::{CalendarCell, DailyEvent, DayView, Transaction};
use crate::projection::project;
use crate::store::{self, KeyValueStore};
use chrono::NaiveDate;
use log::{debug, error, info};
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("a transaction with id '{0}' already exists")]
    DuplicateId(String),
}

/// Read-only view handed to listeners after every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot<'a> {
    pub transactions: &'a [Transaction],
    pub viewed: NaiveDate,
}

type Listener = Box<dyn FnMut(&Snapshot<'_>)>;

pub struct Controller<S: KeyValueStore> {
    store: S,
    transactions: Vec<Transaction>,
    cursor: ViewCursor,
    starting_balance: Decimal,
    listeners: Vec<Listener>,
}

impl<S: KeyValueStore> Controller<S> {
    /// Initial load. Nothing is written back while loading; the cursor
    /// resumes from the stored month or starts at `today`.
    pub fn load(store: S, today: NaiveDate) -> Self {
        let transactions = store::load_transactions(&store);
        let starting_balance = store::starting_balance(&store).unwrap_or_else(|e| {
            error!("could not read starting balance: {}", e);
            Decimal::ZERO
        });
        let viewed = match store::viewed_month(&store) {
            Ok(Some(month)) => month,
            Ok(None) => today,
            Err(e) => {
                error!("could not read viewed month: {}", e);
                today
            }
        };
        info!("loaded {} transactions", transactions.len());
        Self {
            store,
            transactions,
            cursor: ViewCursor::new(viewed),
            starting_balance,
            listeners: Vec::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn viewed(&self) -> NaiveDate {
        self.cursor.viewed
    }

    pub fn starting_balance(&self) -> Decimal {
        self.starting_balance
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            transactions: &self.transactions,
            viewed: self.cursor.viewed,
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&Snapshot<'_>) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn add_transaction(&mut self, tx: Transaction) -> Result<(), StateError> {
        if self.transactions.iter().any(|t| t.id == tx.id) {
            return Err(StateError::DuplicateId(tx.id));
        }
        let mut next = self.transactions.clone();
        next.push(tx);
        self.replace_transactions(next);
        Ok(())
    }

    /// The only way the collection changes. Persists the whole collection;
    /// a failed write is logged and the in-memory collection stays current.
    pub fn replace_transactions(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
        if let Err(e) = store::save_transactions(&self.store, &self.transactions) {
            error!("could not save transactions: {}", e);
        }
        self.notify();
    }

    pub fn previous_month(&mut self) {
        self.move_cursor(self.cursor.previous_month());
    }

    pub fn next_month(&mut self) {
        self.move_cursor(self.cursor.next_month());
    }

    pub fn jump_to_today(&mut self, today: NaiveDate) {
        self.move_cursor(self.cursor.jump_to_today(today));
    }

    pub fn go_to_month(&mut self, month: NaiveDate) {
        self.move_cursor(ViewCursor::new(month));
    }

    fn move_cursor(&mut self, cursor: ViewCursor) {
        self.cursor = cursor;
        if let Err(e) = store::set_viewed_month(&self.store, cursor.viewed) {
            error!("could not save viewed month: {}", e);
        }
        debug!("viewing {}", cursor.label());
        self.notify();
    }

    fn notify(&mut self) {
        let snapshot = Snapshot {
            transactions: &self.transactions,
            viewed: self.cursor.viewed,
        };
        for listener in self.listeners.iter_mut() {
            listener(&snapshot);
        }
    }

    pub fn events(&self, start: NaiveDate, end: NaiveDate) -> Vec<DailyEvent> {
        project(&self.transactions, start, end, self.starting_balance)
    }

    /// Grid for the viewed month joined with a projection running from
    /// `today` to the end of its year.
    pub fn month_view(&self, today: NaiveDate) -> MonthView {
        MonthView {
            label: self.cursor.label(),
            today,
            cells: self.cursor.grid(),
            events: self.events(today, end_of_year(today)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    pub label: String,
    pub today: NaiveDate,
    pub cells: Vec<CalendarCell>,
    pub events: Vec<DailyEvent>,
}

impl MonthView {
    pub fn days(&self) -> Vec<(CalendarCell, DayView<'_>)> {
        self.cells
            .iter()
            .map(|cell| (*cell, resolve_day(cell, &self.events)))
            .collect()
    }

    /// Cells split into Monday-first weeks.
    pub fn weeks(&self) -> Vec<Vec<(CalendarCell, DayView<'_>)>> {
        let mut days = self.days().into_iter().peekable();
        let mut weeks = Vec::new();
        while days.peek().is_some() {
            weeks.push(days.by_ref().take(7).collect());
        }
        weeks
    }
}
