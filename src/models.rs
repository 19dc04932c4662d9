// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A dated, signed cash movement. Negative amounts are expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub title: String,
    pub date: NaiveDate, // YYYY-MM-DD
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    Income,
    Expense,
    Neutral,
}

impl EventColor {
    /// Zero counts as income.
    pub fn for_amount(amount: Decimal) -> Self {
        if amount < Decimal::ZERO {
            EventColor::Expense
        } else {
            EventColor::Income
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            EventColor::Income => "#22c55e",
            EventColor::Expense => "#ef4444",
            EventColor::Neutral => "#3b82f6",
        }
    }
}

/// One projected entry: either a transaction occurrence or the placeholder
/// for a day without transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEvent {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub running_balance: Decimal,
    pub description: String,
    pub date: NaiveDate,
    pub color: EventColor,
}

impl DailyEvent {
    pub fn is_placeholder(&self) -> bool {
        self.title.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub in_month: bool,
}

/// A grid cell joined with the projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayView<'a> {
    pub date: NaiveDate,
    pub balance: Decimal,
    pub items: Vec<&'a DailyEvent>,
}
