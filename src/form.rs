// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Transaction entry: raw text fields in, a fully formed `Transaction` out.

use crate::dates::parse_iso_date;
use crate::models::Transaction;
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

pub const MAX_TITLE_LEN: usize = 100;
/// Largest accepted magnitude for an amount or opening balance, in whole
/// units.
pub const MAX_AMOUNT_UNITS: i64 = 1_000_000_000_000;

// Characters the amount field will take at all: a leading minus, then
// digits and dots.
static AMOUNT_INPUT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9.]*$").unwrap());
// The part of the input that is read as the number.
static AMOUNT_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-?)([0-9]*)(?:\.([0-9]*))?").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a transaction title")]
    MissingTitle,
    #[error("Title must be at most {MAX_TITLE_LEN} characters (got {len})")]
    TitleTooLong { len: usize },
    #[error("Please select a date")]
    MissingDate,
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Please enter a valid amount")]
    InvalidAmount(String),
}

/// Whether the amount field accepts this text. Empty input is accepted so
/// the field can be cleared.
pub fn is_valid_amount_input(s: &str) -> bool {
    AMOUNT_INPUT.is_match(s)
}

/// Reads the leading number of an amount that passed the input filter:
/// `-12.5.` reads as -12.5, `-` or `.` read as nothing.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    if !is_valid_amount_input(s) {
        return None;
    }
    let caps = AMOUNT_VALUE.captures(s)?;
    let sign = caps.get(1).map_or("", |m| m.as_str());
    let int = caps.get(2).map_or("", |m| m.as_str());
    let frac = caps.get(3).map_or("", |m| m.as_str());
    if int.is_empty() && frac.is_empty() {
        return None;
    }
    let mut normalized = format!("{}{}", sign, if int.is_empty() { "0" } else { int });
    if !frac.is_empty() {
        normalized.push('.');
        normalized.push_str(frac);
    }
    normalized
        .parse::<Decimal>()
        .ok()
        .filter(|d| within_amount_limit(d))
}

pub fn within_amount_limit(amount: &Decimal) -> bool {
    amount.abs() <= Decimal::from(MAX_AMOUNT_UNITS)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionForm {
    pub title: String,
    pub date: String,
    pub amount: String,
}

impl TransactionForm {
    pub fn new(title: impl Into<String>, date: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            amount: amount.into(),
        }
    }

    /// Checks title, then date, then amount; the first failure is returned.
    /// On success the transaction gets a fresh id and creation time.
    pub fn validate(&self) -> Result<Transaction, ValidationError> {
        let len = self.title.chars().count();
        if len > MAX_TITLE_LEN {
            return Err(ValidationError::TitleTooLong { len });
        }
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }

        let raw_date = self.date.trim();
        if raw_date.is_empty() {
            return Err(ValidationError::MissingDate);
        }
        let date =
            parse_iso_date(raw_date).ok_or_else(|| ValidationError::InvalidDate(raw_date.into()))?;

        let raw_amount = self.amount.trim();
        let amount = parse_amount(raw_amount)
            .ok_or_else(|| ValidationError::InvalidAmount(raw_amount.into()))?;

        Ok(Transaction {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            date,
            amount,
            created_at: Utc::now(),
        })
    }
}
