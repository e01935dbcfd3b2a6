//! Snapshot input file
//!
//! A snapshot is the JSON document the CLI consumes: recurring records,
//! budget allocations, and portfolio positions describing one household's
//! finances. Every section is optional; a missing section reads as empty.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{BudgetAllocation, PortfolioPosition, RecurringRecord};

/// The parsed contents of a snapshot file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Recurring income and expense records
    #[serde(default)]
    pub records: Vec<RecurringRecord>,

    /// Budget limits per category and month
    #[serde(default)]
    pub allocations: Vec<BudgetAllocation>,

    /// Investment holdings
    #[serde(default)]
    pub positions: Vec<PortfolioPosition>,
}

impl Snapshot {
    /// Load a snapshot from a JSON file
    pub fn load(path: &Path) -> LedgerResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LedgerError::Io(format!(
                "Failed to read snapshot {}: {}",
                path.display(),
                e
            ))
        })?;

        let snapshot = Self::from_json(&contents)?;
        debug!(
            path = %path.display(),
            records = snapshot.records.len(),
            allocations = snapshot.allocations.len(),
            positions = snapshot.positions.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    /// Parse a snapshot from a JSON string
    pub fn from_json(contents: &str) -> LedgerResult<Self> {
        let snapshot: Snapshot = serde_json::from_str(contents)
            .map_err(|e| LedgerError::Snapshot(format!("Failed to parse snapshot: {}", e)))?;

        snapshot.validate_configuration()?;
        Ok(snapshot)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.allocations.is_empty() && self.positions.is_empty()
    }

    /// The earliest start date among records that carry one
    ///
    /// This anchors the expansion window when a report needs the full
    /// history, such as the dashboard's running balance.
    pub fn earliest_start(&self) -> Option<chrono::NaiveDate> {
        self.records.iter().filter_map(|r| r.start).min()
    }

    /// Validate the sections that are configuration rather than ledger data
    ///
    /// Records are deliberately not checked here: the normalizer rejects
    /// bad records one by one, so a single broken record cannot block the
    /// rest of the ledger from loading.
    fn validate_configuration(&self) -> LedgerResult<()> {
        for allocation in &self.allocations {
            if let Err(reason) = allocation.validate() {
                return Err(LedgerError::InvalidAllocation {
                    category: allocation.category.clone(),
                    month: allocation.month,
                    reason,
                });
            }
        }

        for position in &self.positions {
            if let Err(reason) = position.validate() {
                return Err(LedgerError::validation(format!(
                    "Position '{}': {}",
                    position.symbol, reason
                )));
            }
        }

        Ok(())
    }
}
