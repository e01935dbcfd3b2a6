//! Ledger entry model
//!
//! A ledger entry is one concrete dated occurrence produced by expanding a
//! recurring record. Entries are what the aggregation and rollup stages
//! consume.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::RecordId;
use super::money::Money;

/// Direction of a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    /// Apply this direction to an amount: income counts positive, expense
    /// negative
    pub fn signed(&self, amount: Money) -> Money {
        match self {
            Self::Income => amount,
            Self::Expense => -amount,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// One dated occurrence of a recurring record
///
/// `amount` is always positive; `kind` carries the direction. `record_id`
/// points back at the record the occurrence was expanded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// The record this entry was expanded from
    pub record_id: RecordId,

    /// Income or expense
    pub kind: EntryKind,

    /// Category label (income records carry their source label here)
    pub category: String,

    /// Occurrence amount, always positive
    pub amount: Money,

    /// The date this occurrence falls on
    pub occurred_at: NaiveDate,
}

impl LedgerEntry {
    pub fn new(
        record_id: RecordId,
        kind: EntryKind,
        category: impl Into<String>,
        amount: Money,
        occurred_at: NaiveDate,
    ) -> Self {
        Self {
            record_id,
            kind,
            category: category.into(),
            amount,
            occurred_at,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == EntryKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == EntryKind::Expense
    }

    /// Amount with direction applied, for running balances
    pub fn signed_amount(&self) -> Money {
        self.kind.signed(self.amount)
    }
}

impl fmt::Display for LedgerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.occurred_at.format("%Y-%m-%d"),
            self.category,
            self.signed_amount()
        )
    }
}
