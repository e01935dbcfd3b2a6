//! Core data models
//!
//! This module contains the data structures shared by every engine stage:
//! money, months and windows, recurring records, ledger entries, budget
//! allocations and statuses, and portfolio positions.

pub mod budget;
pub mod entry;
pub mod ids;
pub mod money;
pub mod period;
pub mod portfolio;
pub mod record;

pub use budget::{BudgetAllocation, BudgetStatus, BudgetTier, Thresholds, UnbudgetedSpend};
pub use entry::{EntryKind, LedgerEntry};
pub use ids::{AllocationId, RecordId};
pub use money::Money;
pub use period::{DateWindow, ReportingMonth};
pub use portfolio::{PortfolioPosition, PortfolioSummary};
pub use record::{Frequency, RecurringRecord};
