// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Running-balance projection: walks every day of a range and emits one
//! event per transaction, or a placeholder for days without any.

use crate::dates::{end_of_year, to_iso_date_string};
use crate::models::{DailyEvent, EventColor, Transaction};
use crate::utils::fmt_amount;
use chrono::NaiveDate;
use log::{debug, error};
use rust_decimal::Decimal;

pub const PLACEHOLDER_DESCRIPTION: &str = "Daily Balance";

pub fn describe_amount(amount: Decimal) -> String {
    let kind = match EventColor::for_amount(amount) {
        EventColor::Expense => "Expense",
        _ => "Income",
    };
    format!("{}: ${}", kind, fmt_amount(&amount.abs()))
}

/// Project balances from `start` to `end` inclusive.
///
/// Transactions on the same day are applied one at a time in date order
/// (ties keep their input order), so each event carries the balance right
/// after that transaction. Transactions outside the range are ignored.
pub fn project(
    transactions: &[Transaction],
    start: NaiveDate,
    end: NaiveDate,
    starting_balance: Decimal,
) -> Vec<DailyEvent> {
    let mut sorted: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.date >= start && t.date <= end)
        .collect();
    // sort_by_key is stable
    sorted.sort_by_key(|t| t.date);

    let mut events = Vec::new();
    let mut balance = starting_balance;
    let mut pending = sorted.into_iter().peekable();

    for day in start.iter_days().take_while(|d| *d <= end) {
        let mut any = false;
        while let Some(t) = pending.next_if(|t| t.date == day) {
            any = true;
            balance = apply(balance, t);
            events.push(DailyEvent {
                id: t.id.clone(),
                title: Some(t.title.clone()),
                running_balance: balance,
                description: describe_amount(t.amount),
                date: day,
                color: EventColor::for_amount(t.amount),
            });
        }
        if !any {
            events.push(DailyEvent {
                id: format!("balance-{}", to_iso_date_string(day)),
                title: None,
                running_balance: balance,
                description: PLACEHOLDER_DESCRIPTION.to_string(),
                date: day,
                color: EventColor::Neutral,
            });
        }
    }

    debug!(
        "projected {} events over {}..={} from {} transactions",
        events.len(),
        start,
        end,
        transactions.len()
    );
    events
}

/// Adds the transaction, saturating at the representable extremes instead
/// of overflowing.
fn apply(balance: Decimal, t: &Transaction) -> Decimal {
    balance.checked_add(t.amount).unwrap_or_else(|| {
        error!(
            "running balance overflowed at '{}' on {}, clamping",
            t.title, t.date
        );
        if t.amount < Decimal::ZERO {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    })
}

/// Projection from `start` through December 31st of the same year.
pub fn project_to_year_end(
    transactions: &[Transaction],
    start: NaiveDate,
    starting_balance: Decimal,
) -> Vec<DailyEvent> {
    project(transactions, start, end_of_year(start), starting_balance)
}

/// Balance at the close of `day`, or `None` when the day was not projected.
pub fn closing_balance(events: &[DailyEvent], day: NaiveDate) -> Option<Decimal> {
    events
        .iter()
        .rev()
        .find(|e| e.date == day)
        .map(|e| e.running_balance)
}
