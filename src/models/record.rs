//! Recurring record model
//!
//! Raw income and expense schedules as they arrive from upstream. Records
//! are validated and expanded into dated ledger entries by the normalizer;
//! a record that fails validation is rejected individually without
//! poisoning the rest of the batch.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::entry::EntryKind;
use super::ids::RecordId;
use super::money::Money;

/// How often a record recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    /// A single occurrence on the start date
    OneTime,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    pub fn is_repeating(&self) -> bool {
        !matches!(self, Self::OneTime)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneTime => write!(f, "One-time"),
            Self::Weekly => write!(f, "Weekly"),
            Self::Monthly => write!(f, "Monthly"),
            Self::Yearly => write!(f, "Yearly"),
        }
    }
}

/// A recurring income or expense schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringRecord {
    /// Unique identifier (generated when omitted from input)
    #[serde(default)]
    pub id: RecordId,

    /// Income or expense
    pub kind: EntryKind,

    /// Category label; income records carry their source label here
    pub category: String,

    /// Amount per occurrence; must be positive to pass validation
    pub amount: Money,

    /// Recurrence frequency
    pub frequency: Frequency,

    /// First occurrence date; the upstream field is nullable, so absence
    /// is representable and rejected at validation rather than at parse
    #[serde(default)]
    pub start: Option<NaiveDate>,

    /// Last date occurrences may fall on; open-ended when absent
    #[serde(default)]
    pub end: Option<NaiveDate>,
}

impl RecurringRecord {
    /// Create an open-ended record starting on `start`
    pub fn new(
        kind: EntryKind,
        category: impl Into<String>,
        amount: Money,
        frequency: Frequency,
        start: NaiveDate,
    ) -> Self {
        Self {
            id: RecordId::new(),
            kind,
            category: category.into(),
            amount,
            frequency,
            start: Some(start),
            end: None,
        }
    }

    /// Set the end date
    pub fn with_end(mut self, end: NaiveDate) -> Self {
        self.end = Some(end);
        self
    }

    /// Validate the record
    ///
    /// An end date equal to the start date is allowed; it bounds the
    /// schedule to a single occurrence.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if !self.amount.is_positive() {
            return Err(RecordValidationError::NonPositiveAmount {
                amount: self.amount,
            });
        }

        let start = match self.start {
            Some(start) => start,
            None => return Err(RecordValidationError::MissingStart),
        };

        if let Some(end) = self.end {
            if end < start {
                return Err(RecordValidationError::EndBeforeStart { start, end });
            }
        }

        Ok(())
    }
}

impl fmt::Display for RecurringRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.frequency, self.category, self.amount)?;
        if let Some(start) = self.start {
            write!(f, " from {}", start.format("%Y-%m-%d"))?;
        }
        if let Some(end) = self.end {
            write!(f, " until {}", end.format("%Y-%m-%d"))?;
        }
        Ok(())
    }
}

/// Validation errors for recurring records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    NonPositiveAmount { amount: Money },
    MissingStart,
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
}

impl fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount { amount } => {
                write!(f, "Amount must be positive, got {}", amount)
            }
            Self::MissingStart => write!(f, "Start date is missing"),
            Self::EndBeforeStart { start, end } => {
                write!(f, "End date {} is before start date {}", end, start)
            }
        }
    }
}

impl std::error::Error for RecordValidationError {}
