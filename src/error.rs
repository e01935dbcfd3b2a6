//! Custom error types for ledgerscope
//!
//! This module defines the error hierarchy for the engine and its CLI using
//! thiserror for ergonomic error definitions. The taxonomy mirrors how
//! failures propagate: an invalid record is rejected individually during
//! normalization, while a duplicate allocation fails a whole month's budget
//! evaluation.

use thiserror::Error;

use crate::models::budget::AllocationValidationError;
use crate::models::period::ReportingMonth;
use crate::models::record::RecordValidationError;
use crate::models::RecordId;

/// The main error type for ledgerscope operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Snapshot input file errors
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// A recurring record that failed validation
    #[error("Invalid record {record_id}: {reason}")]
    InvalidRecord {
        record_id: RecordId,
        reason: RecordValidationError,
    },

    /// A budget allocation that failed validation
    #[error("Invalid allocation for '{category}' in {month}: {reason}")]
    InvalidAllocation {
        category: String,
        month: ReportingMonth,
        reason: AllocationValidationError,
    },

    /// Two allocations target the same category and month
    #[error("Duplicate budget allocation for '{category}' in {month}")]
    DuplicateAllocation {
        category: String,
        month: ReportingMonth,
    },

    /// Report export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Create a validation error from any message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid-record error
    pub fn invalid_record(record_id: RecordId, reason: RecordValidationError) -> Self {
        Self::InvalidRecord { record_id, reason }
    }

    /// Create a duplicate-allocation error
    pub fn duplicate_allocation(category: impl Into<String>, month: ReportingMonth) -> Self {
        Self::DuplicateAllocation {
            category: category.into(),
            month,
        }
    }

    /// Check if this is a validation error (including invalid records and
    /// allocations)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InvalidRecord { .. } | Self::InvalidAllocation { .. }
        )
    }

    /// Check if this is a duplicate-allocation error
    pub fn is_duplicate_allocation(&self) -> bool {
        matches!(self, Self::DuplicateAllocation { .. })
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledgerscope operations
pub type LedgerResult<T> = Result<T, LedgerError>;
